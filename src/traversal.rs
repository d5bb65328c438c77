//! Array traversal: two ways to walk a fixed-size array.
//!
//! `StepCursor` keeps a position and moves it one element per step until it
//! reaches a stop count. `Span` holds a begin pointer and an end sentinel one
//! past the last element, and stops when the two meet.

use crate::Result;
use std::io::Write;
use std::marker::PhantomData;
use std::mem;

pub const FIRST: [i32; 5] = [1, 9, 5, 3, 4];
pub const SECOND: [i32; 5] = [10, 90, 50, 30, 40];

/// Number of elements, from total storage size over one element's size.
///
/// Zero-sized element types occupy no storage, so `N` is returned directly.
pub fn element_count<T, const N: usize>(arr: &[T; N]) -> usize {
    match mem::size_of::<T>() {
        0 => N,
        width => mem::size_of_val(arr) / width,
    }
}

// ============================================================================
// Way 1: Step Cursor
// ============================================================================

/// Moves over `items` one element at a time until `stop` is reached.
pub struct StepCursor<'a, T> {
    items: &'a [T],
    position: usize,
    stop: usize,
}

impl<'a, T> StepCursor<'a, T> {
    /// `count` is clamped to the slice length.
    pub fn new(items: &'a [T], count: usize) -> Self {
        StepCursor {
            items,
            position: 0,
            stop: count.min(items.len()),
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'a, T> Iterator for StepCursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.position >= self.stop {
            return None;
        }
        let item = self.items.get(self.position)?;
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.stop - self.position;
        (left, Some(left))
    }
}

// ============================================================================
// Way 2: Begin / End Span
// ============================================================================

/// A begin cursor and an end sentinel over a borrowed array.
///
/// The sentinel points one past the last element and is only compared
/// against, never read.
pub struct Span<'a, T> {
    begin: *const T,
    end: *const T,
    _marker: PhantomData<&'a [T]>,
}

impl<'a, T> Span<'a, T> {
    /// Panics on zero-sized `T`: every element would share one address.
    pub fn new<const N: usize>(arr: &'a [T; N]) -> Self {
        assert!(
            mem::size_of::<T>() != 0,
            "zero-sized elements have no distinct addresses"
        );
        let range = arr.as_ptr_range();
        Span {
            begin: range.start,
            end: range.end,
            _marker: PhantomData,
        }
    }

    fn remaining(&self) -> usize {
        // Both pointers come from the same array and begin never passes end.
        unsafe { self.end.offset_from(self.begin) as usize }
    }
}

impl<'a, T> Iterator for Span<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.begin == self.end {
            return None;
        }
        let current = self.begin;
        unsafe {
            // begin < end, so current is in bounds and begin + 1 is at most end
            self.begin = self.begin.add(1);
            Some(&*current)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.remaining();
        (left, Some(left))
    }
}

impl<T> ExactSizeIterator for Span<'_, T> {}

/// Writes each value on its own line.
pub fn write_values<W, I>(out: &mut W, values: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = i32>,
{
    for value in values {
        writeln!(out, "{}", value)?;
    }
    Ok(())
}

/// Prints `FIRST` with a step cursor, then `SECOND` with a begin/end span.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let first = FIRST;
    let second = SECOND;
    let count = element_count(&first);

    write_values(out, StepCursor::new(&first, count).copied())?;
    write_values(out, Span::new(&second).copied())?;
    Ok(())
}
