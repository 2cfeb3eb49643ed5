//! Post mutations: chirp, reply, like, repost, bookmark.
//!
//! Each prints a one-line confirmation with the affected post's ID, so
//! command output can feed the next command.

use anyhow::Result;

use crate::application::Store;

/// Publish a new post.
pub fn chirp(store: &mut Store, text: &str) -> Result<()> {
    let post = store.create_post(text)?;
    println!("Chirped post {}.", post.id);
    Ok(())
}

/// Reply to a post.
pub fn reply(store: &mut Store, post_id: i64, text: &str) -> Result<()> {
    let reply = store.create_reply(post_id, text)?;
    println!("Replied to post {} with post {}.", post_id, reply.id);
    Ok(())
}

/// Toggle a like on a post.
pub fn like(store: &mut Store, post_id: i64) -> Result<()> {
    let liked = store.toggle_like(post_id)?;
    let count = store.post(post_id).map(|p| p.like_count()).unwrap_or(0);
    if liked {
        println!("Liked post {post_id} (♥ {count}).");
    } else {
        println!("Unliked post {post_id} (♥ {count}).");
    }
    Ok(())
}

/// Toggle a repost of a post.
pub fn repost(store: &mut Store, post_id: i64) -> Result<()> {
    if store.toggle_repost(post_id)? {
        println!("Reposted post {post_id}.");
    } else {
        println!("Withdrew repost of post {post_id}.");
    }
    Ok(())
}

/// Toggle a bookmark on a post.
pub fn bookmark(store: &mut Store, post_id: i64) -> Result<()> {
    if store.toggle_bookmark(post_id)? {
        println!("Bookmarked post {post_id}.");
    } else {
        println!("Removed bookmark on post {post_id}.");
    }
    Ok(())
}
