use std::collections::BTreeMap;
use std::collections::HashSet;

use dioxus::prelude::*;
use serde::Deserialize;

use crate::config::RuntimeConfig;
use crate::theme::use_theme;

const TOP_REPOSITORY_COUNT: usize = 6;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GitHubUser {
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    pub language: Option<String>,
    pub description: Option<String>,
}

/// Derived aggregate over the profile and repository responses. Recomputed
/// on every mount, never cached; a failed fetch is `None`, not an error.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsSnapshot {
    pub total_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub total_stars: u32,
    pub total_forks: u32,
    pub languages: BTreeMap<String, u32>,
    pub top_repositories: Vec<GitHubRepo>,
}

pub fn aggregate(user: &GitHubUser, repos: &[GitHubRepo]) -> StatsSnapshot {
    let mut total_stars = 0;
    let mut total_forks = 0;
    let mut languages: BTreeMap<String, u32> = BTreeMap::new();
    for repo in repos {
        total_stars += repo.stargazers_count;
        total_forks += repo.forks_count;
        if let Some(language) = &repo.language {
            *languages.entry(language.clone()).or_insert(0) += 1;
        }
    }
    StatsSnapshot {
        total_repos: user.public_repos,
        followers: user.followers,
        following: user.following,
        total_stars,
        total_forks,
        languages,
        top_repositories: repos.iter().take(TOP_REPOSITORY_COUNT).cloned().collect(),
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LeetCodeStats {
    #[serde(rename = "totalSolved")]
    pub solved: u32,
    #[serde(rename = "easySolved")]
    pub easy: u32,
    #[serde(rename = "mediumSolved")]
    pub medium: u32,
    #[serde(rename = "hardSolved")]
    pub hard: u32,
}

pub fn format_count(value: u32) -> String {
    if value >= 1000 {
        format!("{:.1}k", value as f64 / 1000.0)
    } else {
        value.to_string()
    }
}

pub fn activity_graph_url(username: &str, is_dark: bool) -> String {
    let theme = if is_dark { "react-dark" } else { "minimal" };
    format!(
        "https://github-readme-activity-graph.vercel.app/graph?username={username}&theme={theme}&hide_border=true&radius=16"
    )
}

pub fn stats_card_url(username: &str, is_dark: bool) -> String {
    let theme = if is_dark { "tokyonight" } else { "default" };
    format!(
        "https://github-readme-stats.vercel.app/api?username={username}&show_icons=true&theme={theme}&hide_border=true&border_radius=20&count_private=true"
    )
}

pub fn top_langs_url(username: &str, is_dark: bool) -> String {
    let theme = if is_dark { "tokyonight" } else { "default" };
    format!(
        "https://github-readme-stats.vercel.app/api/top-langs/?username={username}&layout=donut&theme={theme}&hide_border=true&border_radius=20&langs_count=8"
    )
}

pub fn leetcode_card_url(username: &str, is_dark: bool) -> String {
    let theme = if is_dark { "dark" } else { "light" };
    format!(
        "https://leetcard.jacoblin.cool/{username}?theme={theme}&font=Montserrat&border=0&radius=20"
    )
}

#[cfg(target_arch = "wasm32")]
async fn fetch_github_stats(username: &str, token: Option<&str>) -> Result<StatsSnapshot, String> {
    let user: GitHubUser = github_get(
        &format!("https://api.github.com/users/{username}"),
        token,
    )
    .await?;
    let repos: Vec<GitHubRepo> = github_get(
        &format!(
            "https://api.github.com/users/{username}/repos?per_page=100&sort=stars&direction=desc"
        ),
        token,
    )
    .await?;
    Ok(aggregate(&user, &repos))
}

#[cfg(target_arch = "wasm32")]
async fn github_get<T: serde::de::DeserializeOwned>(
    url: &str,
    token: Option<&str>,
) -> Result<T, String> {
    let mut request = gloo_net::http::Request::get(url)
        .header("Accept", "application/vnd.github.v3+json");
    if let Some(token) = token {
        request = request.header("Authorization", &format!("token {token}"));
    }
    let response = request
        .send()
        .await
        .map_err(|err| format!("github fetch failed: {err}"))?;
    if !response.ok() {
        return Err(format!("github fetch failed: status {}", response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|err| format!("github decode failed: {err}"))
}

#[cfg(target_arch = "wasm32")]
async fn fetch_leetcode_stats(username: &str) -> Result<LeetCodeStats, String> {
    let url = format!("https://leetcode-stats-api.herokuapp.com/{username}");
    let response = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|err| format!("leetcode fetch failed: {err}"))?;
    if !response.ok() {
        return Err(format!("leetcode fetch failed: status {}", response.status()));
    }
    response
        .json::<LeetCodeStats>()
        .await
        .map_err(|err| format!("leetcode decode failed: {err}"))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_github_stats(
    _username: &str,
    _token: Option<&str>,
) -> Result<StatsSnapshot, String> {
    Err("stats fetch requires the browser runtime".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_leetcode_stats(_username: &str) -> Result<LeetCodeStats, String> {
    Err("stats fetch requires the browser runtime".to_string())
}

/// The two fetches are independent; either tile degrades on its own while
/// the other renders.
#[component]
pub fn StatsDashboard() -> Element {
    let config = use_context::<RuntimeConfig>();
    let theme = use_theme();
    let mut failed_tiles = use_signal(HashSet::<&'static str>::new);

    let github_username = config.github_username.clone();
    let github_token = config.github_token.clone();
    let github = use_resource(move || {
        let username = github_username.clone();
        let token = github_token.clone();
        async move {
            match fetch_github_stats(&username, token.as_deref()).await {
                Ok(snapshot) => Some(snapshot),
                Err(err) => {
                    tracing::debug!("github stats unavailable: {err}");
                    None
                }
            }
        }
    });

    let leetcode_username = config.leetcode_username.clone();
    let leetcode = use_resource(move || {
        let username = leetcode_username.clone();
        async move {
            match fetch_leetcode_stats(&username).await {
                Ok(stats) => Some(stats),
                Err(err) => {
                    tracing::debug!("leetcode stats unavailable: {err}");
                    None
                }
            }
        }
    });

    let is_dark = theme().is_dark;
    let username = config.github_username.clone();
    let tile_failed = move |id: &'static str| failed_tiles().contains(id);

    let github_tile = match github() {
        None => rsx! {
            p { class: "tile-unavailable", "Loading..." }
        },
        Some(None) => rsx! {
            p { class: "tile-unavailable", "GitHub stats unavailable" }
        },
        Some(Some(snapshot)) => rsx! {
            ul { class: "stat-list",
                li { span { "Repositories" } span { "{format_count(snapshot.total_repos)}" } }
                li { span { "Followers" } span { "{format_count(snapshot.followers)}" } }
                li { span { "Following" } span { "{format_count(snapshot.following)}" } }
                li { span { "Total stars" } span { "{format_count(snapshot.total_stars)}" } }
                li { span { "Total forks" } span { "{format_count(snapshot.total_forks)}" } }
            }
            if !snapshot.top_repositories.is_empty() {
                p { class: "tile-subheader", "Top repositories" }
                ul { class: "repo-list",
                    for repo in snapshot.top_repositories.iter() {
                        li {
                            span {
                                class: "repo-name",
                                title: repo.description.clone().unwrap_or_default(),
                                "{repo.name}"
                            }
                            span { class: "repo-stars", "★ {format_count(repo.stargazers_count)}" }
                        }
                    }
                }
            }
        },
    };

    let solved_tile = match leetcode() {
        None => rsx! {},
        Some(None) => rsx! {
            p { class: "tile-unavailable", "Solved counts unavailable" }
        },
        Some(Some(stats)) => rsx! {
            ul { class: "stat-list",
                li { span { "Solved" } span { "{stats.solved}" } }
                li { span { "Easy" } span { "{stats.easy}" } }
                li { span { "Medium" } span { "{stats.medium}" } }
                li { span { "Hard" } span { "{stats.hard}" } }
            }
        },
    };

    rsx! {
        section { id: "stats", class: "stats-dashboard",
            div { class: "container",
                h2 { class: "section-title", "Dashboard" }
                div { class: "dash-grid",
                    div { class: "tile graph-tile",
                        h3 { class: "tile-header", "GitHub Activity" }
                        if tile_failed("activity") {
                            p { class: "tile-unavailable", "GitHub activity graph unavailable" }
                        } else {
                            img {
                                src: activity_graph_url(&username, is_dark),
                                alt: "GitHub activity graph",
                                class: "tile-media",
                                loading: "lazy",
                                onerror: move |_| { failed_tiles.write().insert("activity"); },
                            }
                        }
                    }
                    div { class: "tile",
                        h3 { class: "tile-header", "GitHub Overview" }
                        {github_tile}
                    }
                    div { class: "tile",
                        h3 { class: "tile-header", "GitHub Stats" }
                        if tile_failed("stats-card") {
                            p { class: "tile-unavailable", "GitHub stats card unavailable" }
                        } else {
                            img {
                                src: stats_card_url(&username, is_dark),
                                alt: "GitHub stats card",
                                class: "tile-media",
                                loading: "lazy",
                                onerror: move |_| { failed_tiles.write().insert("stats-card"); },
                            }
                        }
                    }
                    div { class: "tile",
                        h3 { class: "tile-header", "Languages Used" }
                        if tile_failed("languages") {
                            p { class: "tile-unavailable", "Language stats unavailable" }
                        } else {
                            img {
                                src: top_langs_url(&username, is_dark),
                                alt: "Top languages",
                                class: "tile-media",
                                loading: "lazy",
                                onerror: move |_| { failed_tiles.write().insert("languages"); },
                            }
                        }
                    }
                    div { class: "tile",
                        h3 { class: "tile-header", "LeetCode" }
                        if tile_failed("leetcard") {
                            p { class: "tile-unavailable", "LeetCode card unavailable" }
                        } else {
                            img {
                                src: leetcode_card_url(&config.leetcode_username, is_dark),
                                alt: "LeetCode stats card",
                                class: "tile-media",
                                loading: "lazy",
                                onerror: move |_| { failed_tiles.write().insert("leetcard"); },
                            }
                        }
                        {solved_tile}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn repo(name: &str, stars: u32, forks: u32, language: Option<&str>) -> GitHubRepo {
        GitHubRepo {
            name: name.to_string(),
            stargazers_count: stars,
            forks_count: forks,
            language: language.map(str::to_string),
            description: None,
        }
    }

    #[test]
    fn aggregate_counts_languages_and_sums_stars_and_forks() {
        let user = GitHubUser {
            public_repos: 3,
            followers: 12,
            following: 4,
        };
        let repos = vec![
            repo("a", 5, 1, Some("TS")),
            repo("b", 2, 0, Some("TS")),
            repo("c", 1, 3, Some("Go")),
        ];
        let snapshot = aggregate(&user, &repos);

        assert_eq!(snapshot.total_repos, 3);
        assert_eq!(snapshot.total_stars, 8);
        assert_eq!(snapshot.total_forks, 4);
        assert_eq!(
            snapshot.languages,
            BTreeMap::from([("TS".to_string(), 2), ("Go".to_string(), 1)])
        );
    }

    #[test]
    fn aggregate_skips_repos_without_a_language() {
        let user = GitHubUser {
            public_repos: 2,
            followers: 0,
            following: 0,
        };
        let repos = vec![repo("a", 0, 0, None), repo("b", 0, 0, Some("Rust"))];
        let snapshot = aggregate(&user, &repos);
        assert_eq!(snapshot.languages, BTreeMap::from([("Rust".to_string(), 1)]));
    }

    #[test]
    fn aggregate_caps_top_repositories_at_six() {
        let user = GitHubUser {
            public_repos: 8,
            followers: 0,
            following: 0,
        };
        let repos: Vec<GitHubRepo> = (0..8)
            .map(|i| repo(&format!("r{i}"), 8 - i, 0, None))
            .collect();
        let snapshot = aggregate(&user, &repos);
        assert_eq!(snapshot.top_repositories.len(), 6);
        assert_eq!(snapshot.top_repositories[0].name, "r0");
    }

    #[test]
    fn counts_above_a_thousand_abbreviate() {
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1.0k");
        assert_eq!(format_count(1234), "1.2k");
    }

    #[test]
    fn badge_urls_follow_the_theme_flag() {
        assert!(activity_graph_url("franz", true).contains("theme=react-dark"));
        assert!(activity_graph_url("franz", false).contains("theme=minimal"));
        assert!(stats_card_url("franz", true).contains("theme=tokyonight"));
        assert!(top_langs_url("franz", false).contains("theme=default"));
        assert!(leetcode_card_url("franz", true).contains("theme=dark"));
        assert!(leetcode_card_url("franz", false).contains("theme=light"));
    }
}
