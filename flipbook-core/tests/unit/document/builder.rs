use super::*;

fn builder_with_meta() -> DocumentBuilder {
    let mut b = DocumentBuilder::new();
    b.set_meta("T".into(), "X".into(), 2020, "a.wav".into())
        .unwrap();
    b
}

#[test]
fn frames_accumulate_in_call_order() {
    let mut b = builder_with_meta();
    b.begin_clip(2, 2, "c1".into()).unwrap();
    for duration in 1..=3 {
        b.add_frame(vec![duration; 4], duration).unwrap();
    }

    let doc = b.finish().unwrap();
    assert_eq!(doc.meta.clips.len(), 1);
    let frames = &doc.meta.clips[0].frames;
    assert_eq!(frames.len(), 3);
    assert_eq!(
        frames.iter().map(|f| f.duration).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn clips_accumulate_in_beginclip_order() {
    let mut b = builder_with_meta();
    b.begin_clip(1, 1, "c1".into()).unwrap();
    b.end_clip();
    b.begin_clip(2, 2, "c2".into()).unwrap();
    b.end_clip();
    b.end_clip();
    b.begin_clip(3, 3, "c3".into()).unwrap();

    let doc = b.finish().unwrap();
    let names: Vec<_> = doc.meta.clips.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["c1", "c2", "c3"]);
}

#[test]
fn endclip_does_not_close_the_current_clip() {
    let mut b = builder_with_meta();
    b.begin_clip(2, 2, "c1".into()).unwrap();
    b.end_clip();
    b.add_frame(vec![1, 2, 3, 4], 5).unwrap();
    b.add_embed("sub".into(), 3, 7, 9, 12).unwrap();

    let doc = b.finish().unwrap();
    assert_eq!(doc.meta.clips[0].frames.len(), 1);
    assert_eq!(doc.meta.clips[0].embeds.len(), 1);
}

#[test]
fn frames_and_embeds_target_the_latest_clip() {
    let mut b = builder_with_meta();
    b.begin_clip(1, 1, "c1".into()).unwrap();
    b.add_frame(vec![1], 1).unwrap();
    b.begin_clip(1, 1, "c2".into()).unwrap();
    b.add_frame(vec![2], 1).unwrap();
    b.add_embed("c1".into(), 0, 0, 0, 0).unwrap();

    let doc = b.finish().unwrap();
    assert_eq!(doc.meta.clips[0].frames.len(), 1);
    assert_eq!(doc.meta.clips[1].frames.len(), 1);
    assert!(doc.meta.clips[0].embeds.is_empty());
    assert_eq!(doc.meta.clips[1].embeds[0].name, "c1");
}

#[test]
fn rootclip_is_last_write_wins_and_unchecked() {
    let mut b = builder_with_meta();
    b.set_root_clip("first".into()).unwrap();
    b.set_root_clip("nonexistent".into()).unwrap();

    let doc = b.finish().unwrap();
    assert_eq!(doc.meta.rootclip.as_deref(), Some("nonexistent"));
}

#[test]
fn frame_pixel_length_is_not_checked_against_dimensions() {
    let mut b = builder_with_meta();
    b.begin_clip(2, 2, "c1".into()).unwrap();
    b.add_frame(vec![1, 2, 3], 1).unwrap();

    let doc = b.finish().unwrap();
    assert_eq!(doc.meta.clips[0].frames[0].pixels, vec![1, 2, 3]);
}

#[test]
fn frame_before_beginclip_is_a_state_error() {
    let mut b = builder_with_meta();
    let err = b.add_frame(vec![1], 1).unwrap_err();
    assert!(matches!(err, FlipbookError::State(_)));
}

#[test]
fn embed_before_beginclip_is_a_state_error() {
    let mut b = builder_with_meta();
    let err = b.add_embed("sub".into(), 0, 0, 0, 0).unwrap_err();
    assert!(matches!(err, FlipbookError::State(_)));
}

#[test]
fn beginclip_before_meta_is_a_state_error() {
    let mut b = DocumentBuilder::new();
    let err = b.begin_clip(1, 1, "c1".into()).unwrap_err();
    assert!(matches!(err, FlipbookError::State(_)));
}

#[test]
fn rootclip_before_meta_is_a_state_error() {
    let mut b = DocumentBuilder::new();
    let err = b.set_root_clip("c1".into()).unwrap_err();
    assert!(matches!(err, FlipbookError::State(_)));
}

#[test]
fn second_meta_is_a_state_error() {
    let mut b = builder_with_meta();
    let err = b
        .set_meta("T2".into(), "Y".into(), 2021, "b.wav".into())
        .unwrap_err();
    assert!(matches!(err, FlipbookError::State(_)));

    // The first call's fields are untouched.
    let doc = b.finish().unwrap();
    assert_eq!(doc.meta.title, "T");
    assert_eq!(doc.meta.year, 2020);
}

#[test]
fn finish_without_meta_is_a_state_error() {
    let err = DocumentBuilder::new().finish().unwrap_err();
    assert!(matches!(err, FlipbookError::State(_)));
}
