//! Orchestrator scenarios against a mock gateway.

mod test_utils;

use std::collections::HashSet;
use std::sync::Arc;
use test_utils::MockGateway;
use tokio::sync::Notify;
use vitrine_core::{
    IntelligenceCategory, IntelligenceRecord, MediaRef, Post, PostStatus, SocialNetwork,
    VisualType,
};
use vitrine_error::VitrineErrorKind;
use vitrine_planner::CampaignStudio;

fn studio() -> CampaignStudio<MockGateway> {
    CampaignStudio::new(Arc::new(MockGateway::new()))
}

fn sample_post(id: &str) -> Post {
    Post {
        id: id.to_string(),
        day: "Lundi".to_string(),
        network: SocialNetwork::LinkedIn,
        content: "Financement des récoltes".to_string(),
        suggested_visual: VisualType::Image,
        status: PostStatus::Pending,
        visual: None,
    }
}

#[tokio::test]
async fn test_campaign_yields_one_post_per_day_network_pair() {
    let posts = studio()
        .generate_campaign(
            &[SocialNetwork::LinkedIn, SocialNetwork::Facebook],
            &["Lundi".to_string(), "Mardi".to_string()],
            &[],
            None,
        )
        .await
        .unwrap();

    assert_eq!(posts.len(), 4);
    assert!(posts.iter().all(|p| p.status == PostStatus::Pending));
    assert!(posts.iter().all(|p| p.visual.is_none()));

    let ids: HashSet<&str> = posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids.len(), 4, "ids must be unique within a batch");
}

#[tokio::test]
async fn test_campaign_ids_are_unique_across_invocations() {
    let studio = studio();
    let networks = [SocialNetwork::Instagram];
    let days = ["Vendredi".to_string()];

    let first = studio
        .generate_campaign(&networks, &days, &[], None)
        .await
        .unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = studio
        .generate_campaign(&networks, &days, &[], None)
        .await
        .unwrap();

    assert_ne!(first[0].id, second[0].id);
}

#[tokio::test]
async fn test_campaign_requires_days_and_networks() {
    let studio = studio();

    let no_days = studio
        .generate_campaign(&[SocialNetwork::LinkedIn], &[], &[], None)
        .await;
    assert!(matches!(
        no_days.unwrap_err().kind(),
        VitrineErrorKind::Planner(_)
    ));

    let no_networks = studio
        .generate_campaign(&[], &["Lundi".to_string()], &[], None)
        .await;
    assert!(matches!(
        no_networks.unwrap_err().kind(),
        VitrineErrorKind::Planner(_)
    ));
}

#[tokio::test]
async fn test_campaign_digest_reaches_prompt_builder() {
    let records = vec![IntelligenceRecord {
        institution: "SONIBANK".to_string(),
        category: IntelligenceCategory::Bank,
        trends: vec!["digitalisation".to_string()],
        last_campaigns: String::new(),
        sources: vec![],
    }];
    let digest = CampaignStudio::<MockGateway>::intelligence_digest(&records);
    assert_eq!(digest, "SONIBANK: digitalisation");
}

#[tokio::test]
async fn test_visual_last_write_wins() {
    let studio = studio();
    let post = sample_post("p-1");

    let with_image = studio
        .generate_visual(&post, VisualType::Image)
        .await
        .unwrap();
    assert_eq!(with_image.suggested_visual, VisualType::Image);

    let with_video = studio
        .generate_visual(&with_image, VisualType::Video)
        .await
        .unwrap();

    assert_eq!(with_video.suggested_visual, VisualType::Video);
    match with_video.visual {
        Some(MediaRef::DataUri { ref mime, .. }) => assert_eq!(mime, "video/mp4"),
        ref other => panic!("expected video media, got {:?}", other),
    }
}

#[tokio::test]
async fn test_visual_speech_returns_raw_audio() {
    let studio = studio();
    let post = sample_post("p-2");

    let with_speech = studio
        .generate_visual(&post, VisualType::Speech)
        .await
        .unwrap();

    assert!(matches!(with_speech.visual, Some(MediaRef::RawAudio(_))));
    assert_eq!(with_speech.suggested_visual, VisualType::Speech);
}

#[tokio::test]
async fn test_visual_in_flight_rejects_same_post_only() {
    let gate = Arc::new(Notify::new());
    let gateway = MockGateway::new().with_gate(gate.clone());
    let studio = Arc::new(CampaignStudio::new(Arc::new(gateway)));

    let post = sample_post("p-slow");
    let spawned_studio = studio.clone();
    let spawned_post = post.clone();
    let handle = tokio::spawn(async move {
        spawned_studio
            .generate_visual(&spawned_post, VisualType::Image)
            .await
    });

    while !studio.is_generating(&post.id) {
        tokio::task::yield_now().await;
    }

    // Same post: rejected while outstanding
    let second = studio.generate_visual(&post, VisualType::Video).await;
    assert!(matches!(
        second.unwrap_err().kind(),
        VitrineErrorKind::Planner(_)
    ));

    // Distinct post: proceeds independently
    gate.notify_one();
    let other = sample_post("p-fast");
    gate.notify_one();
    let other_result = studio.generate_visual(&other, VisualType::Image).await;
    assert!(other_result.is_ok());

    let first = handle.await.unwrap().unwrap();
    assert!(first.visual.is_some());
    assert!(!studio.is_generating(&post.id));
}
