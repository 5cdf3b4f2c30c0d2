// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright okerr Contributors 2026.

//! Property tests over arbitrary payloads.

use std::cell::Cell;

use quickcheck::quickcheck;

use crate::exception::ResultException;
use crate::result::Result;
use crate::variant::Variant;

type Sample = core::result::Result<i64, String>;

#[test]
fn exactly_one_variant() {
    fn prop(sample: Sample) -> bool {
        let res: Result<i64, String> = sample.into();
        res.is_ok() != res.is_err()
    }
    quickcheck(prop as fn(Sample) -> bool);
}

#[test]
fn unwrap_returns_the_stored_value() {
    fn prop(value: String) -> bool {
        Result::<String, ()>::Ok(value.clone()).unwrap() == value
            && Result::<(), String>::Err(value.clone()).unwrap_err() == value
    }
    quickcheck(prop as fn(String) -> bool);
}

#[test]
fn unwrap_on_err_is_an_illegal_call() {
    fn prop(error: String) -> bool {
        Result::<u8, String>::Err(error).try_unwrap()
            == Err(ResultException::IllegalCall {
                method: "unwrap",
                variant: Variant::Err,
            })
    }
    quickcheck(prop as fn(String) -> bool);
}

#[test]
fn projections_follow_the_variant() {
    fn prop(value: u32) -> bool {
        Result::<u32, u32>::Ok(value).ok() == Some(value)
            && Result::<u32, u32>::Ok(value).err().is_none()
            && Result::<u32, u32>::Err(value).ok().is_none()
            && Result::<u32, u32>::Err(value).err() == Some(value)
    }
    quickcheck(prop as fn(u32) -> bool);
}

#[test]
fn map_identity_preserves_the_value() {
    fn prop(sample: Sample) -> bool {
        let res: Result<i64, String> = sample.into();
        res.clone().map(|x| x) == res && res.clone().map_err(|e| e) == res
    }
    quickcheck(prop as fn(Sample) -> bool);
}

#[test]
fn and_then_short_circuits_on_err() {
    fn prop(error: String) -> bool {
        let called = Cell::new(false);
        let res = Result::<i64, String>::Err(error.clone()).and_then(|x| {
            called.set(true);
            Result::Ok(x + 1)
        });
        !called.get() && res == Result::Err(error)
    }
    quickcheck(prop as fn(String) -> bool);
}

#[test]
fn or_else_short_circuits_on_ok() {
    fn prop(value: i64) -> bool {
        let called = Cell::new(false);
        let res = Result::<i64, String>::Ok(value).or_else(|e| {
            called.set(true);
            Result::<i64, String>::Err(e)
        });
        !called.get() && res == Result::Ok(value)
    }
    quickcheck(prop as fn(i64) -> bool);
}

#[test]
fn fallbacks_receive_the_error() {
    fn prop(error: String) -> bool {
        let recovered = Result::<String, String>::Err(error.clone())
            .or_else(|e| Result::<String, String>::Ok(e + "!"));
        let computed = Result::<String, String>::Err(error.clone()).unwrap_or_else(|e| e + "?");
        recovered == Result::Ok(format!("{}!", error)) && computed == format!("{}?", error)
    }
    quickcheck(prop as fn(String) -> bool);
}

#[test]
fn unwrap_or_yields_the_default_on_err() {
    fn prop(error: String, default: i64) -> bool {
        Result::<i64, String>::Err(error).unwrap_or(default) == default
    }
    quickcheck(prop as fn(String, i64) -> bool);
}

#[test]
fn slots_must_hold_exactly_one_value() {
    fn prop(value: i64, error: String) -> bool {
        Result::from_slots(Some(value), Some(error)) == Err(ResultException::IllegalInstantiation)
            && Result::<i64, String>::from_slots(None, None)
                == Err(ResultException::IllegalInstantiation)
    }
    quickcheck(prop as fn(i64, String) -> bool);
}

#[test]
fn and_then_chain() {
    let res = Result::<String, String>::Ok(String::from("foo"))
        .and_then(|w| Result::Ok(w + "bar"));
    assert_eq!(res.unwrap(), "foobar");
}

#[test]
fn or_keeps_the_first_ok() {
    assert_eq!(
        Result::<&str, &str>::Ok("foo")
            .or(Result::<&str, &str>::Ok("bar"))
            .unwrap(),
        "foo"
    );
    assert_eq!(
        Result::<&str, &str>::Err("foo").or(Result::<&str, &str>::Ok("bar")),
        Result::Ok("bar")
    );
}
