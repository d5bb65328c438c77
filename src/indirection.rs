//! Pointer indirection: mutation through a `&mut` parameter, three stacked
//! references over one integer, and reading an array through its base
//! pointer.

use crate::Result;
use std::io::Write;

pub const OVERWRITE_VALUE: i32 = 100;

/// Replaces the caller's integer with `OVERWRITE_VALUE`.
///
/// The exclusive borrow lets this function mutate the caller's storage, and
/// only until it returns.
pub fn overwrite_through(slot: &mut i32) {
    *slot = OVERWRITE_VALUE;
}

/// Writes `value` through three stacked references over `target`.
///
/// Returns what each level reads back afterwards, as `[level1, level2, level3]`.
pub fn write_through_levels(target: &mut i32, value: i32) -> [i32; 3] {
    let mut level1: &mut i32 = target;
    let mut level2: &mut &mut i32 = &mut level1;
    let level3: &mut &mut &mut i32 = &mut level2;

    ***level3 = value;

    // Each level is readable again once the one stacked on it is done.
    let seen3 = ***level3;
    let seen2 = **level2;
    let seen1 = *level1;
    [seen1, seen2, seen3]
}

/// Same chain as `write_through_levels`, built from raw pointers.
pub fn write_through_raw_levels(target: &mut i32, value: i32) -> i32 {
    let mut p: *mut i32 = target;
    let mut q: *mut *mut i32 = &mut p;
    let r: *mut *mut *mut i32 = &mut q;

    // r -> q -> p -> target, all alive in this frame
    unsafe {
        ***r = value;
        ***r
    }
}

/// Sets a local 10 to 20 through three levels and prints it.
///
/// Not part of `run`'s output; see DESIGN.md.
pub fn see_pointer<W: Write>(out: &mut W) -> Result<i32> {
    let mut x = 10;
    let [_, _, deepest] = write_through_levels(&mut x, 20);
    writeln!(out, "{}", deepest)?;
    Ok(x)
}

/// Prints the first element of a local array, read as base + 0.
pub fn see_arrays<W: Write>(out: &mut W) -> Result<i32> {
    let arr = [1, 2, 3, 4, 5];
    let _first: *const i32 = &arr[0];

    let base = arr.as_ptr();
    let value = unsafe { *base.add(0) };
    writeln!(out, "{}", value)?;
    Ok(value)
}

pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let mut a = 1;
    overwrite_through(&mut a);
    writeln!(out, "{}", a)?;

    see_arrays(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn output_of(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_run_prints_hundred_then_one() {
        let text = output_of(|out| run(out));
        assert_eq!(text, "100\n1\n");
    }

    #[test]
    fn test_overwrite_ignores_initial_value() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut slot: i32 = rng.gen();
            overwrite_through(&mut slot);
            assert_eq!(slot, 100);
        }

        for start in [i32::MIN, -1, 0, 100, i32::MAX] {
            let mut slot = start;
            overwrite_through(&mut slot);
            assert_eq!(slot, OVERWRITE_VALUE);
        }
    }

    #[test]
    fn test_every_level_sees_the_write() {
        let mut x = 10;
        assert_eq!(write_through_levels(&mut x, 20), [20, 20, 20]);
        assert_eq!(x, 20);

        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let mut target: i32 = rng.gen();
            let value: i32 = rng.gen();
            assert_eq!(write_through_levels(&mut target, value), [value; 3]);
            assert_eq!(target, value);
        }
    }

    #[test]
    fn test_raw_levels_match_reference_levels() {
        let mut by_ref = 10;
        let mut by_raw = 10;
        let [.., deepest] = write_through_levels(&mut by_ref, 20);
        let read_back = write_through_raw_levels(&mut by_raw, 20);

        assert_eq!(read_back, deepest);
        assert_eq!(by_raw, by_ref);
        assert_eq!(by_raw, 20);
    }

    #[test]
    fn test_see_pointer_prints_twenty() {
        let mut out = Vec::new();
        let final_value = see_pointer(&mut out).unwrap();
        assert_eq!(final_value, 20);
        assert_eq!(String::from_utf8(out).unwrap(), "20\n");
    }

    #[test]
    fn test_see_arrays_reads_first_element() {
        let mut out = Vec::new();
        assert_eq!(see_arrays(&mut out).unwrap(), 1);
        assert_eq!(String::from_utf8(out).unwrap(), "1\n");
    }
}
