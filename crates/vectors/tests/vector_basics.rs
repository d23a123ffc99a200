//! Integration tests for construction, indexing, iteration and display.

use vectors::{Vector, VectorError};

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn zeros_has_requested_size() {
    let v = Vector::zeros(4);
    assert_eq!(v.len(), 4);
    assert_eq!(v.size(), 4);
    assert!(v.iter().all(|&x| x == 0.0));
}

#[test]
fn from_values_converts_integers() {
    let v = Vector::from_values([1, 3, 4]);
    assert_eq!(v.to_vec(), vec![1.0, 3.0, 4.0]);
}

#[test]
fn from_values_accepts_other_numeric_types() {
    let from_u8 = Vector::from_values(vec![1u8, 2, 3]);
    let from_f32 = Vector::from_values([1.0f32, 2.0, 3.0]);
    let from_i64 = Vector::from_values([1i64, 2, 3]);
    assert_eq!(from_u8, from_f32);
    assert_eq!(from_f32, from_i64);
}

#[test]
fn from_slice_accepts_borrowed_sequences() {
    let owned = vec![1, 3, 4];
    assert_eq!(Vector::from_slice(&owned), Vector::from_values([1, 3, 4]));
    assert_eq!(Vector::from_slice(&[1.5f32, -2.0]), Vector::from([1.5, -2.0]));
    assert!(Vector::from_slice::<u8>(&[]).is_empty());
    // still usable after the borrow
    assert_eq!(owned.len(), 3);
}

#[test]
fn with_size_accepts_matching_length() {
    let v = Vector::with_size([1.0, 2.0, 3.0], 3).unwrap();
    assert_eq!(v.len(), 3);
}

#[test]
fn with_size_rejects_mismatched_length() {
    let result = Vector::with_size([1, 2, 3], 4);
    assert_eq!(result, Err(VectorError::SizeMismatch { expected: 4, got: 3 }));
}

#[test]
fn conversions_to_and_from_vec() {
    let v: Vector = vec![1.0, 2.0].into();
    let back: Vec<f64> = v.clone().into();
    assert_eq!(back, vec![1.0, 2.0]);
    assert_eq!(v.as_slice(), &[1.0, 2.0]);

    let collected: Vector = (0..3).map(f64::from).collect();
    assert_eq!(collected, Vector::from([0.0, 1.0, 2.0]));
}

#[test]
fn to_vec_is_a_copy() {
    let v = Vector::from([1.0, 2.0]);
    let mut copy = v.to_vec();
    copy[0] = 9.0;
    assert_eq!(v[0], 1.0);
}

// ---------------------------------------------------------------------------
// Indexing
// ---------------------------------------------------------------------------

#[test]
fn get_and_set_within_range() {
    let mut v = Vector::zeros(3);
    v.set(1, 5.0).unwrap();
    assert_eq!(v.get(1), Ok(5.0));
    *v.get_mut(2).unwrap() = -1.0;
    assert_eq!(v, Vector::from([0.0, 5.0, -1.0]));
}

#[test]
fn out_of_range_access_fails() {
    let mut v = Vector::zeros(2);
    assert_eq!(
        v.get(2),
        Err(VectorError::IndexOutOfRange { index: 2, size: 2 })
    );
    assert_eq!(
        v.set(7, 1.0),
        Err(VectorError::IndexOutOfRange { index: 7, size: 2 })
    );
    assert_eq!(v, Vector::zeros(2));
}

#[test]
fn index_operators_read_and_write() {
    let mut v = Vector::from([1.0, 2.0, 3.0]);
    v[2] = 30.0;
    assert_eq!(v[0], 1.0);
    assert_eq!(v[2], 30.0);
}

#[test]
#[should_panic]
fn index_operator_panics_out_of_range() {
    let v = Vector::zeros(1);
    let _ = v[1];
}

// ---------------------------------------------------------------------------
// Iteration & display
// ---------------------------------------------------------------------------

#[test]
fn iteration_is_in_index_order_and_restartable() {
    let v = Vector::from([3.0, 1.0, 2.0]);
    let first: Vec<f64> = v.iter().copied().collect();
    let second: Vec<f64> = (&v).into_iter().copied().collect();
    assert_eq!(first, vec![3.0, 1.0, 2.0]);
    assert_eq!(first, second);

    let owned: Vec<f64> = v.into_iter().collect();
    assert_eq!(owned, first);
}

#[test]
fn iter_mut_updates_in_place() {
    let mut v = Vector::from([1.0, 2.0]);
    for x in v.iter_mut() {
        *x *= 10.0;
    }
    assert_eq!(v, Vector::from([10.0, 20.0]));
}

#[test]
fn display_matches_bracketed_format() {
    assert_eq!(Vector::from_values([1, 2, 3]).to_string(), "[ 1 2 3 ]");
    assert_eq!(Vector::from_values([0, 9, 0]).to_string(), "[ 0 9 0 ]");
    assert_eq!(Vector::from([1.5]).to_string(), "[ 1.5 ]");
}

// ---------------------------------------------------------------------------
// Equality & hashing
// ---------------------------------------------------------------------------

#[test]
fn equality_requires_same_size_and_values() {
    let a = Vector::from([1.0, 2.0]);
    assert_eq!(a, Vector::from([1.0, 2.0]));
    assert_ne!(a, Vector::from([1.0, 2.0, 0.0]));
    assert_ne!(a, Vector::from([1.0, 2.5]));
}

#[test]
fn equal_vectors_hash_equally() {
    use std::collections::HashSet;
    use std::hash::{Hash, Hasher};

    fn hash_of(v: &Vector) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        v.hash(&mut hasher);
        hasher.finish()
    }

    let vectors = [
        Vector::from([1.0, 2.0]),
        Vector::from_values([1, 2]),
        Vector::from([2.0, 1.0]),
    ];
    let hashes: HashSet<u64> = vectors.iter().map(hash_of).collect();
    assert_eq!(hashes.len(), 2);
}
