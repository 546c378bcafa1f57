use simple_vec::{ArrayBuf, SimpleVec, SimpleVecError};

#[test]
fn test_error_detailed_out_of_range() {
    let vec = SimpleVec::from_slice(&[1]).unwrap();

    assert_eq!(
        vec.at(5).unwrap_err(),
        SimpleVecError::OutOfRange {
            index: 5,
            length: 1
        }
    );
}

#[test]
fn test_error_out_of_range_mutable() {
    let mut vec = SimpleVec::<i32>::with_capacity(3).unwrap();

    assert_eq!(
        vec.at_mut(0).unwrap_err(),
        SimpleVecError::OutOfRange {
            index: 0,
            length: 0
        }
    );
}

#[test]
fn test_error_erase_out_of_range() {
    let mut vec = SimpleVec::from_slice(&[1, 2]).unwrap();

    assert_eq!(
        vec.erase(2).unwrap_err(),
        SimpleVecError::OutOfRange {
            index: 2,
            length: 2
        }
    );
    assert_eq!(vec, [1, 2]);
}

#[test]
fn test_error_allocation_failure_on_construction() {
    assert_eq!(
        SimpleVec::<u64>::with_len(usize::MAX).unwrap_err(),
        SimpleVecError::AllocationFailure {
            requested: usize::MAX
        }
    );
    assert!(SimpleVec::<u64>::with_capacity(usize::MAX).is_err());
    assert!(ArrayBuf::<u64>::allocate(usize::MAX).is_err());
}

#[test]
fn test_error_failed_reserve_is_strongly_safe() {
    let mut vec = SimpleVec::from_slice(&[1u64, 2, 3]).unwrap();

    let result = vec.reserve(usize::MAX);

    assert_eq!(
        result.unwrap_err(),
        SimpleVecError::AllocationFailure {
            requested: usize::MAX
        }
    );
    assert_eq!(vec, [1, 2, 3]);
    assert_eq!(vec.capacity(), 3);
}

#[test]
fn test_error_failed_resize_is_strongly_safe() {
    let mut vec = SimpleVec::from_slice(&[1u64, 2]).unwrap();

    assert!(vec.resize(usize::MAX).is_err());

    assert_eq!(vec, [1, 2]);
    assert_eq!(vec.len(), 2);
    assert_eq!(vec.capacity(), 2);
}

#[test]
fn test_error_messages_quality() {
    let vec = SimpleVec::<u8>::new();
    let error = vec.at(0).unwrap_err();
    let message = format!("{}", error);
    assert!(message.contains("index 0"));
    assert!(message.contains("length 0"));

    let error = SimpleVec::<u64>::with_len(usize::MAX).unwrap_err();
    let message = format!("{}", error);
    assert!(message.contains(&usize::MAX.to_string()));
}

#[test]
fn test_error_types_implement_standard_traits() {
    let error = SimpleVecError::OutOfRange {
        index: 1,
        length: 0,
    };

    let debug_str = format!("{:?}", error);
    assert!(!debug_str.is_empty());

    let display_str = format!("{}", error);
    assert!(!display_str.is_empty());

    let cloned = error.clone();
    assert_eq!(error, cloned);

    assert_ne!(error, SimpleVecError::AllocationFailure { requested: 1 });

    let _: &dyn std::error::Error = &error;
}

#[test]
fn test_comprehensive_error_scenarios() {
    let errors = [
        SimpleVecError::OutOfRange {
            index: 5,
            length: 2,
        },
        SimpleVecError::AllocationFailure { requested: 100 },
    ];

    for error in &errors {
        let message = format!("{}", error);
        assert!(
            message.len() > 10,
            "Error message should be descriptive for {:?}",
            error
        );
    }
}
