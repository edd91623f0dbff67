//! HTML synthesis for the projects grid.
//!
//! Everything here is pure: the same input always yields the same markup.
//! Remote text is escaped before it is placed in the page.

use crate::models::RepositorySummary;

pub const NO_DESCRIPTION: &str = "No description available";
pub const FALLBACK_SUBTITLE: &str =
    "Unable to load repositories. Visit my GitHub profile to see my work.";

const PROJECT_ICON: &str = r#"<svg class="project-icon" viewBox="0 0 24 24" width="24" height="24" fill="currentColor">
          <path d="M3 3h18v18H3V3zm16 16V5H5v14h14zM7 7h10v2H7V7zm0 4h10v2H7v-2zm0 4h7v2H7v-2z"/>
        </svg>"#;

const GITHUB_ICON: &str = r#"<svg viewBox="0 0 24 24" width="20" height="20" fill="currentColor">
              <path d="M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z"/>
            </svg>"#;

const EXTERNAL_ICON: &str = r#"<svg viewBox="0 0 24 24" width="20" height="20" fill="currentColor">
              <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6M15 3h6v6M10 14L21 3"/>
            </svg>"#;

const STAR_ICON: &str = r#"<svg viewBox="0 0 24 24" width="14" height="14" fill="currentColor">
            <path d="M12 .587l3.668 7.568 8.332 1.151-6.064 5.828 1.48 8.279-7.416-3.967-7.417 3.967 1.481-8.279-6.064-5.828 8.332-1.151z"/>
          </svg>"#;

const FORK_ICON: &str = r#"<svg viewBox="0 0 24 24" width="14" height="14" fill="currentColor">
            <path d="M21 3c0-1.657-1.343-3-3-3s-3 1.343-3 3c0 1.323.861 2.433 2.05 2.832.168 4.295-2.021 4.764-4.998 5.391-1.709.36-3.642.775-5.052 2.085v-7.492c1.163-.413 2-1.511 2-2.816 0-1.657-1.343-3-3-3s-3 1.343-3 3c0 1.305.837 2.403 2 2.816v12.367c-1.163.414-2 1.512-2 2.817 0 1.657 1.343 3 3 3s3-1.343 3-3c0-1.295-.824-2.388-1.973-2.808.27-3.922 2.57-4.408 5.437-5.012 3.038-.64 6.774-1.442 6.579-7.377 1.141-.425 1.957-1.514 1.957-2.803zm-16.8 0c0-.993.807-1.8 1.8-1.8s1.8.807 1.8 1.8-.807 1.8-1.8 1.8-1.8-.807-1.8-1.8zm3.6 18c0 .993-.807 1.8-1.8 1.8s-1.8-.807-1.8-1.8.807-1.8 1.8-1.8 1.8.807 1.8 1.8z"/>
          </svg>"#;

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Markup for a single project card
pub fn project_card_html(repo: &RepositorySummary) -> String {
    let homepage_link = repo
        .homepage_url
        .as_deref()
        .map(|homepage| {
            format!(
                r#"
          <a href="{}" target="_blank" rel="noopener noreferrer" class="project-link" aria-label="View live site">
            {EXTERNAL_ICON}
          </a>"#,
                html_escape(homepage)
            )
        })
        .unwrap_or_default();

    let language_tag = repo
        .primary_language
        .as_deref()
        .map(|language| {
            format!(
                r#"<span class="project-tech-tag">{}</span>"#,
                html_escape(language)
            )
        })
        .unwrap_or_default();

    let description = html_escape(repo.description.as_deref().unwrap_or(NO_DESCRIPTION));

    format!(
        r#"
    <article class="project-card fade-in">
      <div class="project-header">
        {PROJECT_ICON}
        <div class="project-links">
          <a href="{url}" target="_blank" rel="noopener noreferrer" class="project-link" aria-label="View repository">
            {GITHUB_ICON}
          </a>{homepage_link}
        </div>
      </div>
      <h3 class="project-title">{name}</h3>
      <p class="project-description">{description}</p>
      <div class="project-tech">
        {language_tag}
      </div>
      <div class="project-stats">
        <span class="project-stat">
          {STAR_ICON}
          {stars}
        </span>
        <span class="project-stat">
          {FORK_ICON}
          {forks}
        </span>
      </div>
    </article>
  "#,
        url = html_escape(&repo.url),
        name = html_escape(&repo.name),
        stars = repo.star_count,
        forks = repo.fork_count,
    )
}

/// Grid content: one card per repository, in the given order
pub fn project_cards_html(repos: &[RepositorySummary]) -> String {
    repos.iter().map(project_card_html).collect()
}

/// The single card shown when the feed is unavailable
pub fn fallback_card_html(profile_url: &str) -> String {
    format!(
        r#"
    <div class="project-card fade-in visible" style="grid-column: 1 / -1; text-align: center;">
      <p class="project-description">
        Check out my projects on
        <a href="{}" target="_blank" rel="noopener noreferrer">GitHub</a>
      </p>
    </div>
  "#,
        html_escape(profile_url)
    )
}
