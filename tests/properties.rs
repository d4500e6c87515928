use buffer_transforms::ops::{describe_array_to, ArrayDescription};
use buffer_transforms::{add, detect_edges, invert_channels, NdArrayView};
use proptest::prelude::*;

fn hwc_buffer(max_side: usize, channels: usize) -> impl Strategy<Value = (Vec<usize>, Vec<u8>)> {
    (0..=max_side, 0..=max_side).prop_flat_map(move |(h, w)| {
        proptest::collection::vec(any::<u8>(), h * w * channels)
            .prop_map(move |data| (vec![h, w, channels], data))
    })
}

fn rank3_buffer() -> impl Strategy<Value = (Vec<usize>, Vec<u8>)> {
    (1usize..=4).prop_flat_map(|c| hwc_buffer(6, c))
}

proptest! {
    #[test]
    fn add_matches_wide_sum(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(add(a, b), a as i64 + b as i64);
    }

    #[test]
    fn inversion_is_an_involution((shape, data) in rank3_buffer()) {
        let view = NdArrayView::from_u8(&shape, &data).unwrap();
        let once = invert_channels(&view).unwrap();
        for (o, i) in once.as_bytes().iter().zip(&data) {
            prop_assert_eq!(*o, 255 - *i);
        }
        let twice = invert_channels(&once.as_view()).unwrap();
        prop_assert_eq!(twice.as_bytes(), &data[..]);
        prop_assert_eq!(twice.shape(), &shape[..]);
    }

    #[test]
    fn edge_map_is_binary_and_not_upscaled(
        (shape, data) in hwc_buffer(12, 3),
        low in -50i32..300,
        high in -50i32..600,
    ) {
        let view = NdArrayView::from_u8(&shape, &data).unwrap();
        let out = detect_edges(&view, low, high).unwrap();
        let out_shape = out.shape();
        prop_assert_eq!(out_shape.len(), 3);
        prop_assert!(out_shape[0] <= shape[0]);
        prop_assert!(out_shape[1] <= shape[1]);
        prop_assert_eq!(out_shape[2], 1);
        prop_assert!(out.as_bytes().iter().all(|&v| v == 0 || v == 255));
    }

    #[test]
    fn describe_never_mutates((shape, data) in rank3_buffer()) {
        let before = data.clone();
        let view = NdArrayView::from_u8(&shape, &data).unwrap();
        let mut sink = Vec::new();
        prop_assert_eq!(describe_array_to(&view, &mut sink).unwrap(), 0);
        prop_assert_eq!(&data, &before);
        let desc = ArrayDescription::of(&view);
        prop_assert_eq!(desc.head.len(), data.len().min(10));
    }
}
