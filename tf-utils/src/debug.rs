//! `Debug` formatting for large GPU-bound buffers
//!
//! Meshes and particle systems keep tens of thousands of elements in flat
//! vectors. The formatters here plug into `custom_debug` field attributes and
//! print only the head of such a vector, followed by a count of what was left
//! out:
//!
//! ```text
//! positions: [(0.0, -5.0, 0.0), (1.9, -4.6, 0.0)] + 240 triples
//! indices: U16([0, 2, 1, 0, 3, 2] + 1434 elements)
//! ```
//!
//! Enable the `debug-print-all` feature to print every element.
//!
//! `custom_debug` hands the formatter a reference to the field itself, so
//! these take `&Vec<T>` rather than a slice.

#![allow(clippy::ptr_arg)]

use std::fmt;

/// Elements shown by [`trimmed_vec_fmt`]
const HEAD_ELEMENTS: usize = 6;

/// Triples shown by [`packed_vec3_fmt`]
const HEAD_TRIPLES: usize = 2;

fn shown(available: usize, head: usize) -> usize {
    if cfg!(feature = "debug-print-all") {
        available
    } else {
        available.min(head)
    }
}

/// Print the first few elements and the number left out
pub fn trimmed_vec_fmt<T: fmt::Debug>(values: &Vec<T>, f: &mut fmt::Formatter) -> fmt::Result {
    let shown = shown(values.len(), HEAD_ELEMENTS);
    write!(f, "{:?}", &values[..shown])?;

    match values.len() - shown {
        0 => Ok(()),
        hidden => write!(f, " + {} elements", hidden),
    }
}

/// Print packed `x, y, z` floats as triples
///
/// Positions, normals, velocities and colors are all stored this way. A
/// length that is not a multiple of three is reported as loose floats.
pub fn packed_vec3_fmt(values: &Vec<f32>, f: &mut fmt::Formatter) -> fmt::Result {
    let triples = values.len() / 3;
    let shown = shown(triples, HEAD_TRIPLES);

    f.debug_list()
        .entries(values.chunks_exact(3).take(shown).map(|t| (t[0], t[1], t[2])))
        .finish()?;

    let hidden = triples - shown;
    if hidden > 0 {
        write!(f, " + {} triples", hidden)?;
    }
    let loose = values.len() % 3;
    if loose > 0 {
        write!(f, " + {} loose floats", loose)?;
    }
    Ok(())
}
