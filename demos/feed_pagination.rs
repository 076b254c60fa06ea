/// Example: paging through an upstream feed whose response shape drifts
/// between releases, merging each page into one persisted collection
use crucible::{merge_entities, parse_comments_page, Comment};
use serde_json::json;

fn main() {
    println!("=== Paginated Feed Merge ===\n");

    // Page 1: flat items with a top-level cursor.
    let page1 = json!({
        "items": [
            {"id": "a", "text": "first!", "likes": 3},
            {"id": "b", "text": "nice one"}
        ],
        "nextCursor": "cursor-1"
    });

    // Page 2: a newer deployment wraps everything and moves pagination.
    let page2 = json!({
        "comments": {
            "edges": [
                {"node": {"id": "b", "text": "nice one (edited)", "like_count": "5"}},
                {"node": {"id": "c", "text": "<i>late</i> reply"}}
            ],
            "pagination": {"nextCursor": null, "hasMore": false}
        }
    });

    let mut feed: Vec<Comment> = Vec::new();

    for (i, payload) in [page1, page2].iter().enumerate() {
        let page = parse_comments_page(payload);
        println!(
            "page {}: {} item(s), cursor={:?}, has_more={}",
            i + 1,
            page.items.len(),
            page.next_cursor,
            page.has_more
        );
        feed = merge_entities(feed, page.items);
    }

    println!("\nmerged feed ({} comments):", feed.len());
    for comment in &feed {
        println!("  [{}] {} ({} likes)", comment.id, comment.text, comment.likes);
    }

    // "b" was updated in place at its original position; "c" appended.
    assert_eq!(feed.len(), 3);
    assert_eq!(feed[1].id, "b");
    assert_eq!(feed[1].text, "nice one (edited)");
    assert_eq!(feed[1].likes, 5);
    assert_eq!(feed[2].text, "late reply");

    println!("\n✓ Updates land in place, new comments append, order is stable");
}
