//! End-to-end packing tests over mixed command lists

use drawlist_core::{
    as_bytes, pack, Arc, Capsule, Circle, Color, CommandList, CommandType, Curve, Disk,
    EquilateralTriangle, Expand, Extent, Line, OrientedRect, PackOptions, PackedRecord,
    PolarAngleSpanRadialLineArray, PolyLine, Primitive, PrimitiveKind, RadialLine, Rect,
    RenderSettings, RoundedRect, SpaceTransform, Triangle, Vec2, DEFAULT_TOLERANCE, TAU,
};

fn mixed_list() -> CommandList {
    let mut list = CommandList::new();
    list.push(Curve::default());
    list.push(PolyLine::default());
    list.push(PolarAngleSpanRadialLineArray::default());
    list.push(Circle::default());
    list.push(Triangle::default());
    list
}

#[test]
fn records_are_grouped_by_object_id_in_list_order() {
    let records = pack(&mixed_list(), &PackOptions::default()).unwrap();

    let mut ids: Vec<i32> = records.iter().map(|r| r.object_id).collect();
    let packed_order = ids.clone();
    ids.sort();
    assert_eq!(packed_order, ids, "records interleave between primitives");

    ids.dedup();
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);
}

#[test]
fn record_counts_add_up() {
    let list = mixed_list();
    let records = pack(&list, &PackOptions::default()).unwrap();
    let expected: usize = list
        .iter()
        .map(|p| p.expand(0, DEFAULT_TOLERANCE).unwrap().len())
        .sum();
    assert_eq!(records.len(), expected);
    assert_eq!(as_bytes(&records).len(), records.len() * PackedRecord::STRIDE);
}

#[test]
fn every_command_type_has_the_same_stride() {
    let list: CommandList = [
        Primitive::from(Line::default()),
        Arc::default().into(),
        Disk::default().into(),
        Rect::default().into(),
        OrientedRect::default().into(),
        RoundedRect::default().into(),
        Capsule::default().into(),
        EquilateralTriangle::default().into(),
    ]
    .into_iter()
    .collect();

    let records = pack(&list, &PackOptions::default()).unwrap();
    let kinds: Vec<_> = records.iter().filter_map(PackedRecord::kind).collect();
    assert_eq!(kinds, CommandType::ALL.to_vec());
    for record in &records {
        assert_eq!(bytemuck::bytes_of(record).len(), 56);
    }
}

#[test]
fn circle_scenario() {
    let mut list = CommandList::new();
    for _ in 0..7 {
        list.push(Disk::default());
    }
    list.push(Circle::new(Vec2::new(0.5, 0.5), 0.25, Color::BLACK, 0.05));

    let records = pack(&list, &PackOptions::default()).unwrap();
    let circle: Vec<_> = records.iter().filter(|r| r.object_id == 7).collect();
    assert_eq!(circle.len(), 1);
    let r = circle[0];
    assert_eq!(r.kind(), Some(CommandType::Arc));
    assert_eq!(r.start, [0.5, 0.5]);
    assert_eq!(r.end, [0.0, TAU]);
    assert_eq!(r.radius, 0.25);
    assert_eq!(r.thickness, 0.05);
}

#[test]
fn polyline_scenario() {
    let mut list = CommandList::new();
    list.push(PolyLine::new(
        [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 0.0),
        ],
        Color::BLACK,
        0.02,
    ));

    let records = pack(&list, &PackOptions::default()).unwrap();
    let segments: Vec<_> = records.iter().map(|r| (r.start, r.end)).collect();
    assert_eq!(
        segments,
        vec![
            ([0.0, 0.0], [0.0, 1.0]),
            ([0.0, 1.0], [1.0, 1.0]),
            ([1.0, 1.0], [1.0, 0.0]),
        ]
    );
    assert!(records.iter().all(|r| r.object_id == 0));
}

#[test]
fn degenerate_polyline_packs_nothing_but_keeps_ids() {
    let mut list = CommandList::new();
    list.push(PolyLine::new([Vec2::ONE], Color::BLACK, 0.1));
    list.push(Line::default());

    let records = pack(&list, &PackOptions::default()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].object_id, 1);
}

#[test]
fn span_array_angle_law_through_the_pipeline() {
    let prototype = RadialLine::new(Vec2::ZERO, Vec2::new(0.0, 1.0), 1.0, 0.1, Color::BLACK, 0.1);
    let mut list = CommandList::new();
    let key = list.push(PolarAngleSpanRadialLineArray::new(prototype.clone(), 0.6, 6));

    let records = pack(&list, &PackOptions::default()).unwrap();
    assert_eq!(records.len(), 6);
    for (i, r) in records.iter().enumerate() {
        let expected = Vec2::from_angle((0.1 + i as f32 * 0.1) * TAU);
        assert!((Vec2::from(r.end) - expected).length() < 1e-5);
    }

    match list.get(key) {
        Some(Primitive::PolarAngleSpanRadialLineArray(array)) => {
            assert_eq!(array.prototype, prototype)
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn failing_primitive_fails_the_whole_pass() {
    let list = mixed_list();
    let before: Vec<_> = list.iter().cloned().collect();

    assert!(pack(&list, &PackOptions::default().with_tolerance(0.0)).is_err());
    assert_eq!(list.iter().cloned().collect::<Vec<_>>(), before);
}

#[test]
fn scale_transform_isotropy() {
    let mut list = CommandList::new();
    list.push(Rect::new(Vec2::new(2.0, 4.0), Vec2::new(1.0, 1.0), Color::BLACK));
    list.push(Arc::new(Vec2::new(2.0, 2.0), 0.0, 0.25, 1.0, Color::BLACK, 0.5));

    let plain = pack(&list, &PackOptions::default()).unwrap();
    let scaled = pack(
        &list,
        &PackOptions::default().with_transform(SpaceTransform::scale(2.0, 4.0)),
    )
    .unwrap();

    assert_eq!(scaled[0].start, [4.0, 16.0]);
    assert_eq!(scaled[0].end, [2.0, 4.0]);
    assert_eq!(scaled[0].radius, plain[0].radius * 4.0);
    assert_eq!(scaled[1].end, plain[1].end);
    assert_eq!(scaled[1].radius, 4.0);
    assert_eq!(scaled[1].thickness, 2.0);
}

#[test]
fn transform_applied_twice_compounds() {
    let mut records = vec![PackedRecord::line(Vec2::ONE, Vec2::ONE, Color::BLACK, 1.0)];
    let t = SpaceTransform::scale(2.0, 2.0);
    t.apply(&mut records);
    t.apply(&mut records);
    assert_eq!(records[0].start, [4.0, 4.0]);
    assert_eq!(records[0].thickness, 4.0);
}

#[test]
fn pixel_authoring_round_trips_to_normalized() {
    let settings = RenderSettings::from_toml_str(
        "[space]\nmode = \"pixels\"\nwidth = 256\nheight = 256\n",
    )
    .unwrap();

    // curve tolerance is in authoring units, so segment counts differ
    let kinds = PrimitiveKind::ALL
        .into_iter()
        .filter(|kind| *kind != PrimitiveKind::Curve);

    let mut list = CommandList::new();
    for kind in kinds.clone() {
        list.add_kind(kind, settings.authoring_extent());
    }
    let from_pixels = pack(&list, &settings.pack_options()).unwrap();

    let mut normalized = CommandList::new();
    for kind in kinds {
        normalized.add_kind(kind, Extent::NORMALIZED);
    }
    let from_normalized = pack(&normalized, &PackOptions::default()).unwrap();

    assert_eq!(from_pixels.len(), from_normalized.len());
    for (a, b) in from_pixels.iter().zip(&from_normalized) {
        assert_eq!(a.command_type, b.command_type);
        assert_eq!(a.object_id, b.object_id);
        for (x, y) in a.start.iter().zip(&b.start) {
            assert!((x - y).abs() < 1e-4, "{a:?} vs {b:?}");
        }
    }
}
