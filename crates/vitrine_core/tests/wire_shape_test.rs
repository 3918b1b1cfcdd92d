//! The persisted document shape: camelCase fields and the dashboard's
//! enumeration wire values.

use vitrine_core::{
    IntelligenceCategory, IntelligenceRecord, MediaRef, Post, PostDraft, PostStatus,
    SocialNetwork, SourceRef, VisualType,
};

#[test]
fn test_post_serializes_like_the_dashboard_documents() {
    let post = Post {
        id: "1714000000000-0".to_string(),
        day: "Lundi".to_string(),
        network: SocialNetwork::LinkedIn,
        content: "Financement des récoltes".to_string(),
        suggested_visual: VisualType::Image,
        status: PostStatus::Pending,
        visual: None,
    };

    let json = serde_json::to_value(&post).unwrap();
    assert_eq!(json["network"], "LinkedIn");
    assert_eq!(json["suggestedVisual"], "IMAGE");
    assert_eq!(json["status"], "PENDING");
    assert!(json.get("visual").is_none(), "absent media is omitted");
}

#[test]
fn test_post_round_trip() {
    let post = Post {
        id: "1714000000000-3".to_string(),
        day: "Vendredi".to_string(),
        network: SocialNetwork::Instagram,
        content: "Entrepreneuriat féminin".to_string(),
        suggested_visual: VisualType::Speech,
        status: PostStatus::Approved,
        visual: Some(MediaRef::RawAudio("AAD/fw==".to_string())),
    };

    let document = serde_json::to_string(&post).unwrap();
    let restored: Post = serde_json::from_str(&document).unwrap();
    assert_eq!(restored, post);
}

#[test]
fn test_collection_round_trip_preserves_order() {
    let posts: Vec<Post> = ["a", "b", "c"]
        .iter()
        .map(|id| Post {
            id: id.to_string(),
            day: "Mercredi".to_string(),
            network: SocialNetwork::Facebook,
            content: String::new(),
            suggested_visual: VisualType::Video,
            status: PostStatus::Published,
            visual: None,
        })
        .collect();

    let document = serde_json::to_string(&posts).unwrap();
    let restored: Vec<Post> = serde_json::from_str(&document).unwrap();
    assert_eq!(restored, posts);
}

#[test]
fn test_draft_deserializes_from_gateway_shape() {
    let draft: PostDraft = serde_json::from_str(
        r#"{
            "day": "Mardi",
            "network": "Facebook",
            "content": "Tontine digitale",
            "suggestedVisual": "VIDEO"
        }"#,
    )
    .unwrap();

    assert_eq!(draft.network, SocialNetwork::Facebook);
    assert_eq!(draft.suggested_visual, VisualType::Video);
}

#[test]
fn test_intelligence_category_wire_values() {
    let record: IntelligenceRecord = serde_json::from_str(
        r#"{
            "institution": "Al Izza",
            "category": "Money Transfer",
            "trends": ["transfert instantané"],
            "lastCampaigns": "Promo diaspora"
        }"#,
    )
    .unwrap();

    assert_eq!(record.category, IntelligenceCategory::MoneyTransfer);
    assert!(record.sources.is_empty(), "sources default to empty");

    let json = serde_json::to_value(&IntelligenceRecord {
        sources: vec![SourceRef {
            title: "Observatoire".to_string(),
            uri: "https://example.ne".to_string(),
        }],
        ..record
    })
    .unwrap();
    assert_eq!(json["category"], "Money Transfer");
    assert_eq!(json["lastCampaigns"], "Promo diaspora");
}

#[test]
fn test_status_labels() {
    assert_eq!(PostStatus::Pending.label_fr(), "En attente");
    assert_eq!(PostStatus::Approved.label_fr(), "Approuvé");
    assert_eq!(PostStatus::Published.label_fr(), "Publié");
}

#[test]
fn test_media_ref_display_url() {
    let image = MediaRef::DataUri {
        mime: "image/png".to_string(),
        data: "aWNp".to_string(),
    };
    assert_eq!(image.display_url(), "data:image/png;base64,aWNp");
    assert_eq!(
        MediaRef::Url("https://dl/clip.mp4".to_string()).display_url(),
        "https://dl/clip.mp4"
    );
}
