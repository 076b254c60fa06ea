/// Quickstart: normalize messy comment payloads from three API variants
use crucible::normalize_comment;
use serde_json::json;

fn main() {
    println!("=== Crucible Quickstart ===\n");

    // The same logical comment, as three upstream shapes actually deliver it.
    let variants = vec![
        json!({
            "id": "c1",
            "text": "  <b>Great</b> video!  ",
            "creatorHandle": "ada",
            "likes": 12
        }),
        json!({
            "comment_id": "c1",
            "body": "<b>Great</b> video!",
            "user_name": "ada",
            "like_count": "12"
        }),
        json!({
            "node": {
                "comment": {
                    "uuid": "c1",
                    "message": "Great video!",
                    "author": {"username": "ada"},
                    "stats": {"likes": 12}
                }
            }
        }),
    ];

    for (i, raw) in variants.iter().enumerate() {
        let comment = normalize_comment(raw).expect("all three variants normalize");
        println!("variant {}:", i + 1);
        println!("  id      = {}", comment.id);
        println!("  text    = {}", comment.text);
        println!("  handle  = {}", comment.creator_handle);
        println!("  likes   = {}", comment.likes);
        println!();
    }

    // Entities missing identity or content are dropped, not padded.
    assert!(normalize_comment(&json!({"text": "no id"})).is_none());
    assert!(normalize_comment(&json!({"id": "x", "text": "<br/>"})).is_none());
    println!("✓ Invalid items are dropped rather than emitted with placeholders");
}
