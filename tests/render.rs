use portfolio_site::models::RepositorySummary;
use portfolio_site::render::{
    fallback_card_html, html_escape, project_card_html, project_cards_html, NO_DESCRIPTION,
};

fn full_repo() -> RepositorySummary {
    RepositorySummary {
        name: "portfolio".to_string(),
        url: "https://github.com/mraafaykhan/portfolio".to_string(),
        homepage_url: Some("https://mraafaykhan.dev".to_string()),
        description: Some("My personal site".to_string()),
        primary_language: Some("JavaScript".to_string()),
        star_count: 42,
        fork_count: 7,
        is_fork: false,
    }
}

#[test]
fn test_card_contains_all_fields() {
    let html = project_card_html(&full_repo());

    assert!(html.contains(r#"<article class="project-card fade-in">"#));
    assert!(html.contains(r#"<h3 class="project-title">portfolio</h3>"#));
    assert!(html.contains(r#"<p class="project-description">My personal site</p>"#));
    assert!(html.contains(r#"<span class="project-tech-tag">JavaScript</span>"#));
    assert!(html.contains(r#"href="https://github.com/mraafaykhan/portfolio""#));
    assert!(html.contains(r#"href="https://mraafaykhan.dev""#));
    assert!(html.contains(r#"aria-label="View live site""#));
    assert!(html.contains("42"));
    assert!(html.contains("7"));
}

#[test]
fn test_card_optional_fields_absent() {
    let repo = RepositorySummary {
        homepage_url: None,
        description: None,
        primary_language: None,
        ..full_repo()
    };
    let html = project_card_html(&repo);

    assert!(html.contains(&format!(
        r#"<p class="project-description">{}</p>"#,
        NO_DESCRIPTION
    )));
    assert!(!html.contains("project-tech-tag"));
    assert!(!html.contains("View live site"));
    assert!(html.contains(r#"aria-label="View repository""#));
}

#[test]
fn test_remote_text_is_escaped() {
    let repo = RepositorySummary {
        name: "<script>alert(1)</script>".to_string(),
        description: Some("Tom & Jerry's \"show\"".to_string()),
        ..full_repo()
    };
    let html = project_card_html(&repo);

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("Tom &amp; Jerry&#39;s &quot;show&quot;"));
}

#[test]
fn test_html_escape() {
    assert_eq!(html_escape("a < b && c > \"d\" 'e'"), "a &lt; b &amp;&amp; c &gt; &quot;d&quot; &#39;e&#39;");
    assert_eq!(html_escape("plain"), "plain");
}

#[test]
fn test_cards_follow_input_order() {
    let first = RepositorySummary {
        name: "first".to_string(),
        ..full_repo()
    };
    let second = RepositorySummary {
        name: "second".to_string(),
        ..full_repo()
    };

    let html = project_cards_html(&[first, second]);

    assert_eq!(html.matches("<article").count(), 2);
    assert!(html.find(">first<").expect("first") < html.find(">second<").expect("second"));
    assert_eq!(project_cards_html(&[]), "");
}

#[test]
fn test_fallback_card() {
    let html = fallback_card_html("https://github.com/mraafaykhan");

    assert!(html.contains(r#"class="project-card fade-in visible""#));
    assert!(html.contains("grid-column: 1 / -1"));
    assert!(html.contains(r#"<a href="https://github.com/mraafaykhan" target="_blank" rel="noopener noreferrer">GitHub</a>"#));
}
