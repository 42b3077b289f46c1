use radix_sorting::{sort_by_key, sort_f64, sort_i64, sort_u64, strict, RadixSortError};

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: String,
    age: u32,
}

fn person(name: &str, age: u32) -> Person {
    Person {
        name: name.to_string(),
        age,
    }
}

#[test]
fn test_unsigned_scenario() {
    let mut data = vec![170u64, 45, 75, 90, 802, 24, 2, 66];
    let mut buf = vec![0u64; data.len()];
    sort_u64(&mut data, &mut buf).unwrap();
    assert_eq!(data, vec![2, 24, 45, 66, 75, 90, 170, 802]);
}

#[test]
fn test_signed_scenario() {
    let mut data = vec![-5i64, 3, -10, 0, 2];
    let mut buf = vec![0u64; data.len()];
    sort_i64(&mut data, &mut buf).unwrap();
    assert_eq!(data, vec![-10, -5, 0, 2, 3]);
}

#[test]
fn test_float_scenario() {
    let mut data = vec![3.14f64, -2.5, 0.0, 1.5, -1.0];
    let mut buf = vec![0u64; data.len()];
    sort_f64(&mut data, &mut buf).unwrap();
    assert_eq!(data, vec![-2.5, -1.0, 0.0, 1.5, 3.14]);
}

#[test]
fn test_records_by_age_are_stable() {
    let mut people = vec![
        person("Alice", 30),
        person("Bob", 25),
        person("Carol", 35),
        person("Dave", 25),
    ];
    let mut buf = people.clone();
    sort_by_key(&mut people, &mut buf, |p| p.age).unwrap();

    let ages: Vec<u32> = people.iter().map(|p| p.age).collect();
    assert_eq!(ages, vec![25, 25, 30, 35]);
    let names: Vec<&str> = people.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Dave", "Alice", "Carol"]);
}

#[test]
fn test_records_with_stale_buffer_contents() {
    let mut buf = vec![person("stale", 0); 8];
    let mut people = vec![person("x", 3), person("y", 1), person("z", 2)];
    sort_by_key(&mut people, &mut buf, |p| p.age).unwrap();
    let names: Vec<&str> = people.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["y", "z", "x"]);
}

#[test]
fn test_undersized_buffer_scenario() {
    let mut data = vec![3u64, 1, 2];
    let mut buf = vec![0u64; 1];
    let err = sort_u64(&mut data, &mut buf).unwrap_err();
    assert_eq!(
        err,
        RadixSortError::BufferTooSmall {
            data_len: 3,
            scratch_len: 1
        }
    );
    assert_eq!(data, vec![3, 1, 2]);
}

#[test]
fn test_points_by_distance() {
    // Sort points by squared distance from the origin.
    let mut points: Vec<(f64, f64)> = vec![(3.0, 4.0), (1.0, 1.0), (-2.0, 0.0), (0.0, -1.0)];
    let mut buf = points.clone();
    strict::sort_by_key(&mut points, &mut buf, |&(x, y)| x * x + y * y);
    assert_eq!(points, vec![(0.0, -1.0), (1.0, 1.0), (-2.0, 0.0), (3.0, 4.0)]);
}

#[test]
#[should_panic(expected = "scratch buffer too small")]
fn test_strict_undersized_buffer_panics() {
    let mut data = vec![3i64, 1, 2];
    let mut buf = vec![0u64; 2];
    strict::sort_i64(&mut data, &mut buf);
}
