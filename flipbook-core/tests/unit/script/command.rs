use super::*;

#[test]
fn dispatch_builds_the_expected_document() {
    let mut b = DocumentBuilder::new();
    let sequence = vec![
        Command::SetMeta {
            title: "T".into(),
            team: "X".into(),
            year: 2020,
            audio: "a.wav".into(),
        },
        Command::BeginClip {
            width: 2,
            height: 2,
            name: "c1".into(),
        },
        Command::AddFrame {
            pixels: vec![1, 2, 3, 4],
            duration: 5,
        },
        Command::EndClip,
        Command::AddEmbed {
            name: "sub".into(),
            x: 3,
            y: 7,
            z: 9,
            t: 12,
        },
        Command::SetRootClip { name: "c1".into() },
    ];
    for command in sequence {
        dispatch(&mut b, command).unwrap();
    }

    let doc = b.finish().unwrap();
    assert_eq!(doc.meta.title, "T");
    assert_eq!(doc.meta.rootclip.as_deref(), Some("c1"));
    assert_eq!(doc.meta.clips.len(), 1);

    let clip = &doc.meta.clips[0];
    assert_eq!(clip.frames[0].pixels, vec![1, 2, 3, 4]);
    assert_eq!(clip.frames[0].duration, 5);
    assert_eq!(clip.embeds[0].name, "sub");
    assert_eq!(
        (clip.embeds[0].x, clip.embeds[0].y, clip.embeds[0].z, clip.embeds[0].t),
        (3, 7, 9, 12)
    );
}

#[test]
fn dispatch_surfaces_builder_failures() {
    let mut b = DocumentBuilder::new();
    let err = dispatch(
        &mut b,
        Command::AddFrame {
            pixels: vec![1],
            duration: 1,
        },
    )
    .unwrap_err();
    assert!(matches!(err, crate::FlipbookError::State(_)));
}
