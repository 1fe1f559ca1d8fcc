//! Shared layout engine for the two compressed sparse formats
//!
//! CSR and CSC are one storage scheme with the major axis swapped: the
//! non-zero values laid out in major-axis order, a minor-axis index per
//! value, and a pointer array marking where each major-axis slice starts.
//! Everything that depends only on that shape lives here, written in
//! axis-agnostic terms; `CsrMatrix` and `CscMatrix` are thin typed views
//! over it.

use num_traits::Num;

/// Which axis a compressed layout treats as primary
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum MajorAxis {
    Row,
    Col,
}

impl MajorAxis {
    /// Name of the pointer array, for diagnostics
    fn ptr_name(self) -> &'static str {
        match self {
            MajorAxis::Row => "row_ptr",
            MajorAxis::Col => "col_ptr",
        }
    }

    /// Name of the per-entry index array, for diagnostics
    fn index_name(self) -> &'static str {
        match self {
            MajorAxis::Row => "col_indices",
            MajorAxis::Col => "row_indices",
        }
    }

    /// Name of the major-axis dimension field, for diagnostics
    fn dim_name(self) -> &'static str {
        match self {
            MajorAxis::Row => "n_rows",
            MajorAxis::Col => "n_cols",
        }
    }

    /// Name of the minor-axis dimension field, for diagnostics
    fn minor_dim_name(self) -> &'static str {
        match self {
            MajorAxis::Row => "n_cols",
            MajorAxis::Col => "n_rows",
        }
    }

    /// What the major axis is called ("Row 3 out of bounds")
    fn major_name(self) -> &'static str {
        match self {
            MajorAxis::Row => "Row",
            MajorAxis::Col => "Column",
        }
    }

    /// What the per-entry index refers to
    fn minor_name(self) -> &'static str {
        match self {
            MajorAxis::Row => "Column",
            MajorAxis::Col => "Row",
        }
    }

    /// What one major-axis slice is called in lowercase prose
    fn slice_name(self) -> &'static str {
        match self {
            MajorAxis::Row => "row",
            MajorAxis::Col => "column",
        }
    }
}

/// Validates the structural invariants of a compressed layout
///
/// Panics with a descriptive message on the first violation:
/// - `ptr` has length `n_major + 1`, starts at 0, is non-decreasing, and
///   ends at the entry count
/// - `indices` runs the same length as the values
/// - every index lies in `[0, n_minor)`
/// - indices are strictly increasing within each major-axis slice
pub(crate) fn validate_layout(
    axis: MajorAxis,
    n_major: usize,
    n_minor: usize,
    ptr: &[usize],
    indices: &[usize],
    n_values: usize,
) {
    assert_eq!(
        ptr.len(),
        n_major + 1,
        "{}.len() must be {} + 1",
        axis.ptr_name(),
        axis.dim_name()
    );
    assert_eq!(
        indices.len(),
        n_values,
        "{}.len() must equal values.len()",
        axis.index_name()
    );
    assert_eq!(
        ptr[n_major],
        n_values,
        "{}[{}] must equal values.len()",
        axis.ptr_name(),
        axis.dim_name()
    );
    assert_eq!(ptr[0], 0, "{}[0] must be 0", axis.ptr_name());

    // Monotonicity first: afterwards every slice is a valid range into
    // indices and the per-entry checks below cannot index out of bounds.
    for slice in 0..n_major {
        assert!(
            ptr[slice] <= ptr[slice + 1],
            "{} must be non-decreasing",
            axis.ptr_name()
        );
    }

    for slice in 0..n_major {
        for pos in ptr[slice]..ptr[slice + 1] {
            assert!(
                indices[pos] < n_minor,
                "{} index {} out of bounds ({} = {})",
                axis.minor_name(),
                indices[pos],
                axis.minor_dim_name(),
                n_minor
            );

            if pos > ptr[slice] {
                assert!(
                    indices[pos - 1] < indices[pos],
                    "{} must be strictly increasing within {} {}",
                    axis.index_name(),
                    axis.slice_name(),
                    slice
                );
            }
        }
    }
}

/// Compresses `(major, minor, value)` triplets into a layout
///
/// Triplets may arrive in any order and may repeat a coordinate; duplicates
/// are summed and entries that sum to zero are dropped, so the returned
/// values hold true non-zeros only. The returned indices are strictly
/// increasing within each major-axis slice.
///
/// Panics if a coordinate lies outside `n_major × n_minor`.
pub(crate) fn compress_triplets<T>(
    axis: MajorAxis,
    n_major: usize,
    n_minor: usize,
    mut entries: Vec<(usize, usize, T)>,
) -> (Vec<usize>, Vec<usize>, Vec<T>)
where
    T: Copy + Num,
{
    for &(major, minor, _) in &entries {
        assert!(
            major < n_major,
            "{} index {} out of bounds ({} = {})",
            axis.major_name(),
            major,
            axis.dim_name(),
            n_major
        );
        assert!(
            minor < n_minor,
            "{} index {} out of bounds ({} = {})",
            axis.minor_name(),
            minor,
            axis.minor_dim_name(),
            n_minor
        );
    }

    entries.sort_by_key(|&(major, minor, _)| (major, minor));

    // Merge duplicate coordinates by summing
    let mut merged: Vec<(usize, usize, T)> = Vec::with_capacity(entries.len());

    for (major, minor, value) in entries {
        match merged.last_mut() {
            Some(last) if last.0 == major && last.1 == minor => {
                last.2 = last.2 + value;
            }
            _ => merged.push((major, minor, value)),
        }
    }

    // Drop entries that cancelled to zero and build the final layout
    let mut counts = vec![0; n_major];
    let mut indices = Vec::with_capacity(merged.len());
    let mut values = Vec::with_capacity(merged.len());

    for (major, minor, value) in merged {
        if value.is_zero() {
            continue;
        }

        counts[major] += 1;
        indices.push(minor);
        values.push(value);
    }

    (pointers_from_counts(&counts), indices, values)
}

/// Transposes a compressed layout, making the minor axis primary
///
/// This is the CSR↔CSC conversion: a counting scatter that buckets every
/// entry under its minor index. Walking the source in major order keeps
/// each output slice sorted by the old major index, so the result is a
/// valid layout with no further sorting.
pub(crate) fn transpose_layout<T>(
    n_major: usize,
    n_minor: usize,
    ptr: &[usize],
    indices: &[usize],
    values: &[T],
) -> (Vec<usize>, Vec<usize>, Vec<T>)
where
    T: Copy + Num,
{
    // Count entries per minor index
    let mut counts = vec![0; n_minor];

    for &minor in indices {
        counts[minor] += 1;
    }

    let new_ptr = pointers_from_counts(&counts);

    let nnz = indices.len();
    let mut new_indices = vec![0; nnz];
    let mut new_values = vec![T::zero(); nnz];

    // Stable scatter into each minor index's slice
    let mut next_free = new_ptr.clone();

    for major in 0..n_major {
        for pos in ptr[major]..ptr[major + 1] {
            let minor = indices[pos];
            let dest = next_free[minor];

            new_indices[dest] = major;
            new_values[dest] = values[pos];

            next_free[minor] += 1;
        }
    }

    (new_ptr, new_indices, new_values)
}

/// Builds a slice-pointer array from per-slice entry counts
///
/// The result is the exclusive prefix sum of `counts`, one element longer:
/// `ptr[0] = 0` and `ptr[i + 1] = ptr[i] + counts[i]`.
pub(crate) fn pointers_from_counts(counts: &[usize]) -> Vec<usize> {
    let mut ptr = Vec::with_capacity(counts.len() + 1);
    let mut sum = 0;

    ptr.push(0);

    for &count in counts {
        sum += count;
        ptr.push(sum);
    }

    ptr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointers_from_counts() {
        let counts = vec![1, 2, 3, 4];
        let expected = vec![0, 1, 3, 6, 10];
        assert_eq!(pointers_from_counts(&counts), expected);

        let counts = vec![0, 0, 5, 0];
        let expected = vec![0, 0, 0, 5, 5];
        assert_eq!(pointers_from_counts(&counts), expected);

        assert_eq!(pointers_from_counts(&[]), vec![0]);
    }

    #[test]
    fn test_compress_triplets_sorts_and_merges() {
        // Out of order, with (1, 1) repeated
        let entries = vec![(2, 0, 4), (0, 1, 2), (1, 1, 3), (0, 0, 1), (1, 1, 2)];

        let (ptr, indices, values) = compress_triplets(MajorAxis::Row, 3, 2, entries);

        assert_eq!(ptr, vec![0, 2, 3, 4]);
        assert_eq!(indices, vec![0, 1, 1, 0]);
        assert_eq!(values, vec![1, 2, 5, 4]);
    }

    #[test]
    fn test_compress_triplets_drops_zero_sums() {
        // (0, 0) cancels to zero; the explicit zero at (1, 1) never lands
        let entries = vec![(0, 0, 3), (0, 0, -3), (0, 1, 7), (1, 1, 0)];

        let (ptr, indices, values) = compress_triplets(MajorAxis::Row, 2, 2, entries);

        assert_eq!(ptr, vec![0, 1, 1]);
        assert_eq!(indices, vec![1]);
        assert_eq!(values, vec![7]);
    }

    #[test]
    #[should_panic(expected = "Row index 5 out of bounds (n_rows = 2)")]
    fn test_compress_triplets_rejects_bad_coordinate() {
        compress_triplets(MajorAxis::Row, 2, 2, vec![(5, 0, 1)]);
    }

    #[test]
    fn test_transpose_layout() {
        // Row-major layout of
        //    [1 2 0]
        //    [0 3 0]
        //    [4 0 5]
        let ptr = vec![0, 2, 3, 5];
        let indices = vec![0, 1, 1, 0, 2];
        let values = vec![1, 2, 3, 4, 5];

        let (new_ptr, new_indices, new_values) = transpose_layout(3, 3, &ptr, &indices, &values);

        // Column-major layout of the same matrix
        assert_eq!(new_ptr, vec![0, 2, 4, 5]);
        assert_eq!(new_indices, vec![0, 2, 0, 1, 2]);
        assert_eq!(new_values, vec![1, 4, 2, 3, 5]);
    }

    #[test]
    fn test_transpose_layout_empty() {
        let (ptr, indices, values) = transpose_layout::<i64>(2, 3, &[0, 0, 0], &[], &[]);

        assert_eq!(ptr, vec![0, 0, 0, 0]);
        assert!(indices.is_empty());
        assert!(values.is_empty());
    }

    #[test]
    #[should_panic(expected = "col_indices must be strictly increasing within row 0")]
    fn test_validate_layout_rejects_unsorted_slice() {
        validate_layout(MajorAxis::Row, 1, 3, &[0, 2], &[2, 0], 2);
    }
}
