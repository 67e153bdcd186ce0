use crate::boolean::set_bool;
use crate::numeric::{set_float, set_int, set_uint};
use crate::pointer::set_pointer;
use crate::structured::set_struct;
use crate::text::set_string;
use crate::{SetError, Settable, Slot, SourceValue, trace};

/// Coerces `value` into `destination`, writing it in place.
///
/// This is shorthand for `set_slot(destination.slot(), value)`.
///
/// ```
/// use coerce::{SourceValue, set};
///
/// let mut port: u16 = 0;
/// set(&mut port, &SourceValue::from("8080")).unwrap();
/// assert_eq!(port, 8080);
///
/// let mut ratio: f32 = 0.0;
/// set(&mut ratio, &SourceValue::from(3)).unwrap();
/// assert_eq!(ratio, 3.0);
/// ```
pub fn set<T: Settable>(destination: &mut T, value: &SourceValue) -> Result<(), SetError> {
    set_slot(destination.slot(), value)
}

/// Coerces `value` into the location `destination` points at.
///
/// Routing depends only on the slot's static kind; exactly one converter
/// runs. On error the destination keeps its previous value.
///
/// Slots of [unsupported](Slot::Unsupported) kinds are left untouched and the
/// call reports success. Do not rely on this function to reject destinations
/// it cannot fill.
pub fn set_slot(destination: Slot<'_>, value: &SourceValue) -> Result<(), SetError> {
    trace!(
        "setting {} destination from {}",
        destination.kind(),
        value.type_name()
    );

    match destination {
        Slot::Int(dst) => set_int(dst, value),
        Slot::Uint(dst) => set_uint(dst, value),
        Slot::Bool(dst) => set_bool(dst, value),
        Slot::Float(dst) => set_float(dst, value),
        Slot::String(dst) => set_string(dst, value),
        Slot::Pointer(dst) => set_pointer(dst, value),
        Slot::Struct(dst) => set_struct(dst, value),
        Slot::Unsupported(_type_name) => {
            trace!("{_type_name} has no converter, leaving it untouched");
            Ok(())
        }
    }
}
