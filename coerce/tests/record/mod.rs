use coerce::SourceValue;
use coerce_null::{NullInt, NullString};
use coerce_testhelpers::{IPanic, setup};

use crate::fixture::{Record, dataset, populate};

#[test]
fn every_field_is_populated() -> Result<(), IPanic> {
    setup();

    let mut r = Record::default();
    populate(&mut r, &dataset())?;

    assert_eq!(r.int_int, 1000);
    assert_eq!(r.int_int_8, 20);
    assert_eq!(r.int_int_16, 200);
    assert_eq!(r.int_int_32, 2000);
    assert_eq!(r.int_int_64, 20000);
    assert_eq!(r.int_8_int, 10);
    assert_eq!(r.int_16_int, 1000);
    assert_eq!(r.int_32_int, 1000);
    assert_eq!(r.int_64_int, 1000);
    assert_eq!(r.int_string, 1000);
    assert_eq!(r.int_string_empty, 0);
    assert_eq!(r.int_ptr_int.as_deref(), Some(&123));

    assert_eq!(r.uint_uint, 1000);
    assert_eq!(r.uint_uint_8, 10);
    assert_eq!(r.uint_uint_16, 100);
    assert_eq!(r.uint_uint_32, 1000);
    assert_eq!(r.uint_uint_64, 10000);
    assert_eq!(r.uint_8_uint, 10);
    assert_eq!(r.uint_16_uint, 1000);
    assert_eq!(r.uint_32_uint, 1000);
    assert_eq!(r.uint_64_uint, 1000);
    assert_eq!(r.uint_string, 1000);

    assert!(r.bool_bool);
    assert!(r.bool_int);
    assert!(r.bool_uint);
    assert!(r.bool_string);

    assert_eq!(r.float_32_float_32, 123.2_f32);
    assert_eq!(r.float_32_float_64, 1234.2_f32);
    assert_eq!(r.float_64_float_32, 123.19999694824219);
    assert_eq!(r.float_64_float_64, 1234.2);
    assert_eq!(r.float_64_int, 123.0);
    assert_eq!(r.float_64_uint, 123.0);
    assert_eq!(r.float_64_string, 123.3);

    assert_eq!(r.string_string, "test");
    assert_eq!(r.string_int, "123");
    assert_eq!(r.string_uint, "123");
    assert_eq!(r.string_bool, "true");
    assert_eq!(r.string_float, "1234.2");

    assert_eq!(r.null_int_int, NullInt::new(12));
    assert_eq!(r.null_int_string, NullInt::new(12));
    assert_eq!(r.null_int_ptr_string.as_deref(), Some(&NullInt::new(12)));
    assert_eq!(r.null_string_int, NullString::new("1234".to_string()));
    assert_eq!(
        r.null_string_ptr_string.as_deref(),
        Some(&NullString::new("test".to_string()))
    );

    Ok(())
}

#[test]
fn populating_twice_is_stable() -> Result<(), IPanic> {
    setup();

    let data = dataset();
    let mut once = Record::default();
    populate(&mut once, &data)?;
    let mut twice = Record::default();
    populate(&mut twice, &data)?;
    populate(&mut twice, &data)?;

    assert_eq!(format!("{once:?}"), format!("{twice:?}"));
    Ok(())
}

#[test]
fn unknown_keys_have_no_slot() {
    setup();

    let mut r = Record::default();
    assert!(r.slot("no_such_field").is_none());
    assert!(r.slot("int_int").is_some());
}

#[test]
fn a_failing_field_stops_population_and_keeps_its_value() {
    setup();

    let mut r = Record {
        int_8_int: 7,
        ..Record::default()
    };
    let data = vec![
        ("int_int", SourceValue::Isize(5)),
        ("int_8_int", SourceValue::from("128")),
        ("int_16_int", SourceValue::Isize(9)),
    ];

    let err = populate(&mut r, &data).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot parse \"128\" as int: out of range for 8 bits"
    );
    assert_eq!(r.int_int, 5);
    assert_eq!(r.int_8_int, 7);
    assert_eq!(r.int_16_int, 0);
}
