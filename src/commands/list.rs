//! List posts or tags fetched from Ghost

use anyhow::Result;
use std::collections::HashMap;

use crate::feed::{FeedStatus, PostFeed};
use crate::ghost::Post;
use crate::Site;

/// List site content by type
pub async fn run(site: &Site, content_type: &str) -> Result<()> {
    if !matches!(content_type, "post" | "posts" | "tag" | "tags") {
        anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
    }

    let mut feed = site.post_feed()?;
    let posts = load(&mut feed).await?;

    match content_type {
        "post" | "posts" => {
            println!("Posts ({}):", posts.len());
            for post in &posts {
                println!("  {}", format_post(post));
            }
        }
        _ => {
            let tags = tag_counts(&posts);
            println!("Tags ({}):", tags.len());
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
    }

    Ok(())
}

/// Mount the feed and wait for its single fetch
async fn load(feed: &mut PostFeed) -> Result<Vec<Post>> {
    feed.mount();
    let state = feed.settled().await;

    match state.status {
        FeedStatus::Loaded | FeedStatus::Empty => Ok(state
            .posts
            .map(|posts| posts.as_ref().clone())
            .unwrap_or_default()),
        FeedStatus::Failed(message) => anyhow::bail!("Failed to fetch posts: {}", message),
        FeedStatus::Idle | FeedStatus::Loading => anyhow::bail!("Post feed did not finish"),
    }
}

fn format_post(post: &Post) -> String {
    let date = post
        .published_at
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unpublished".to_string());
    let tags = post.tag_names();

    if tags.is_empty() {
        format!("{} - {} [{}]", date, post.title, post.slug)
    } else {
        format!(
            "{} - {} [{}] ({})",
            date,
            post.title,
            post.slug,
            tags.join(", ")
        )
    }
}

/// Tag usage, most used first, ties by name
fn tag_counts(posts: &[Post]) -> Vec<(String, usize)> {
    let mut tags: HashMap<String, usize> = HashMap::new();
    for post in posts {
        for tag in &post.tags {
            *tags.entry(tag.name.clone()).or_insert(0) += 1;
        }
    }

    let mut tags: Vec<_> = tags.into_iter().collect();
    tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tags
}
