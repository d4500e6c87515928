mod common;

use buffer_transforms::ops::{call, detect_edges_with, EdgeOptions, Operation, Value};
use buffer_transforms::{describe_array, detect_edges, invert_channels, ArgumentError, DType, NdArray, NdArrayView};
use common::synthetic_image::{checkerboard_bgr, flat_bgr};

#[test]
fn checkerboard_edges_follow_cell_boundaries() {
    common::init_logger();
    let (width, height, cell) = (64usize, 48usize, 16usize);
    let buffer = checkerboard_bgr(width, height, cell);
    let shape = [height, width, 3];
    let view = NdArrayView::from_u8(&shape, &buffer).unwrap();

    let edges = detect_edges(&view, 100, 200).unwrap();
    assert_eq!(edges.shape(), &[height, width, 1]);
    let bytes = edges.as_bytes();
    assert!(bytes.iter().all(|&v| v == 0 || v == 255));

    // Cell interiors are flat.
    for cy in 0..height / cell {
        for cx in 0..width / cell {
            let (x, y) = (cx * cell + cell / 2, cy * cell + cell / 2);
            assert_eq!(bytes[y * width + x], 0, "cell ({cx}, {cy}) interior");
        }
    }
    // Every interior vertical boundary carries edge pixels away from corners.
    let y = cell / 2;
    for bx in 1..width / cell {
        let x0 = bx * cell;
        assert!(
            (x0 - 2..x0 + 2).any(|x| bytes[y * width + x] == 255),
            "missing edge near column {x0}"
        );
    }
}

#[test]
fn flat_image_has_no_edges() {
    let buffer = flat_bgr(20, 10, [90, 120, 200]);
    let shape = [10, 20, 3];
    let view = NdArrayView::from_u8(&shape, &buffer).unwrap();
    let det = detect_edges_with(&view, &EdgeOptions::with_thresholds(1, 2)).unwrap();
    assert_eq!(det.strong_count, 0);
    assert!(det.edges.as_bytes().iter().all(|&v| v == 0));
}

#[test]
fn inversion_leaves_input_untouched() {
    let buffer = checkerboard_bgr(8, 6, 2);
    let before = buffer.clone();
    let shape = [6, 8, 3];
    let view = NdArrayView::from_u8(&shape, &buffer).unwrap();
    let out = invert_channels(&view).unwrap();
    assert_eq!(buffer, before);
    assert_eq!(out.shape(), view.shape());
    for (o, i) in out.as_bytes().iter().zip(&buffer) {
        assert_eq!(*o, 255 - *i);
    }
}

#[test]
fn describe_returns_zero_for_every_dtype() {
    for dtype in DType::ALL {
        let arr = NdArray::zeros(&[2, 3], dtype).unwrap();
        assert_eq!(describe_array(&arr.as_view()), 0, "{dtype}");
    }
}

#[test]
fn registry_round_trip_matches_direct_calls() {
    let buffer = checkerboard_bgr(12, 12, 4);
    let arr = NdArray::from_vec(vec![12, 12, 3], DType::UInt8, buffer).unwrap();

    let via_table = call(
        Operation::DetectEdges.name(),
        &[Value::Array(arr.clone()), Value::Int(100), Value::Int(200)],
    )
    .unwrap()
    .into_array()
    .unwrap();
    let direct = detect_edges(&arr.as_view(), 100, 200).unwrap();
    assert_eq!(via_table, direct);

    let twice = call(
        "invert_channels",
        &[call("invert_channels", &[Value::Array(arr.clone())]).unwrap()],
    )
    .unwrap();
    assert_eq!(twice, Value::Array(arr));
}

#[test]
fn image_operations_reject_float_arrays() {
    let arr = NdArray::zeros(&[2, 2, 3], DType::Float32).unwrap();
    for name in ["invert_channels", "detect_edges"] {
        let op = Operation::from_name(name).unwrap();
        let mut args = vec![Value::Array(arr.clone())];
        args.resize(op.arity(), Value::Int(10));
        let err = op.call(&args).unwrap_err();
        assert_eq!(
            err,
            ArgumentError::DType {
                expected: DType::UInt8,
                got: DType::Float32
            },
            "{name}"
        );
    }
}
