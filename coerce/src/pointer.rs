//! Pointer destinations.
//!
//! A pointer slot is always materialized: every set allocates a fresh
//! zero-valued pointee, fills it through the dispatcher, and publishes it only
//! once the fill succeeded. A failed fill drops the new allocation and leaves
//! the old pointer (or `None`) in place.

use alloc::boxed::Box;

use crate::{SetError, Settable, Slot, SourceValue, debug, set_slot};

/// An owning pointer the engine can allocate into.
///
/// Implemented for `Option<Box<T>>` (a nullable pointer) and `Box<T>` for
/// every `T: Settable + Default`, which covers nested pointers as well.
pub trait PointerSlot {
    /// Name of the pointee type, for diagnostics.
    fn pointee_type_name(&self) -> &'static str;

    /// Allocates a zero-valued pointee, lets `fill` write it, and publishes
    /// the allocation only if `fill` succeeds.
    fn materialize(
        &mut self,
        fill: &mut dyn FnMut(Slot<'_>) -> Result<(), SetError>,
    ) -> Result<(), SetError>;
}

impl<T: Settable + Default> PointerSlot for Option<Box<T>> {
    fn pointee_type_name(&self) -> &'static str {
        core::any::type_name::<T>()
    }

    fn materialize(
        &mut self,
        fill: &mut dyn FnMut(Slot<'_>) -> Result<(), SetError>,
    ) -> Result<(), SetError> {
        let mut fresh = Box::<T>::default();
        fill(T::slot(&mut fresh))?;
        *self = Some(fresh);
        Ok(())
    }
}

impl<T: Settable + Default> PointerSlot for Box<T> {
    fn pointee_type_name(&self) -> &'static str {
        core::any::type_name::<T>()
    }

    fn materialize(
        &mut self,
        fill: &mut dyn FnMut(Slot<'_>) -> Result<(), SetError>,
    ) -> Result<(), SetError> {
        let mut fresh = Box::<T>::default();
        fill(T::slot(&mut fresh))?;
        *self = fresh;
        Ok(())
    }
}

impl<T: Settable + Default> Settable for Option<Box<T>> {
    #[inline]
    fn slot(&mut self) -> Slot<'_> {
        Slot::Pointer(self)
    }
}

impl<T: Settable + Default> Settable for Box<T> {
    #[inline]
    fn slot(&mut self) -> Slot<'_> {
        Slot::Pointer(self)
    }
}

/// Allocates a new pointee for `dst` and sets it from `value`.
pub(crate) fn set_pointer(dst: &mut dyn PointerSlot, value: &SourceValue) -> Result<(), SetError> {
    debug!(
        "allocating {} for pointer destination",
        dst.pointee_type_name()
    );
    dst.materialize(&mut |pointee| set_slot(pointee, value))
}
