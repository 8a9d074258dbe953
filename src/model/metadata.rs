use crate::model::game::Game;

pub const FALLBACK_TITLE: &str = "DailyGames - Descubra novos jogos.";
pub const DESCRIPTION_LIMIT: usize = 100;
const ELLIPSIS: &str = "...";

/// What ends up in the document head: title, link-preview tags and crawler directives.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub description: Option<String>,
    pub open_graph: Option<OpenGraph>,
    pub robots: Option<Robots>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpenGraph {
    pub title: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
    pub nocache: bool,
    pub google_bot: GoogleBot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoogleBot {
    pub index: bool,
    pub follow: bool,
    pub noimageindex: bool,
}

/// Directives every game page is published with.
pub const GAME_ROBOTS: Robots = Robots {
    index: true,
    follow: true,
    nocache: true,
    google_bot: GoogleBot {
        index: true,
        follow: true,
        noimageindex: true,
    },
};

impl Robots {
    /// Content of the `robots` meta tag, e.g. `index, follow, nocache`.
    #[must_use]
    pub fn content(&self) -> String {
        let mut parts = vec![
            if self.index { "index" } else { "noindex" },
            if self.follow { "follow" } else { "nofollow" },
        ];
        if self.nocache {
            parts.push("nocache");
        }
        parts.join(", ")
    }
}

impl GoogleBot {
    #[must_use]
    pub fn content(&self) -> String {
        let mut parts = vec![
            if self.index { "index" } else { "noindex" },
            if self.follow { "follow" } else { "nofollow" },
        ];
        if self.noimageindex {
            parts.push("noimageindex");
        }
        parts.join(", ")
    }
}

impl PageMetadata {
    #[must_use]
    pub fn for_game(game: &Game) -> Self {
        Self {
            title: game.title.clone(),
            description: Some(truncate_description(&game.description)),
            open_graph: Some(OpenGraph {
                title: game.title.clone(),
                images: vec![game.image_url.clone()],
            }),
            robots: Some(GAME_ROBOTS),
        }
    }

    /// Site-wide default, also what a game page gets when its record can't be loaded.
    #[must_use]
    pub fn fallback() -> Self {
        Self::titled(FALLBACK_TITLE)
    }

    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            open_graph: None,
            robots: None,
        }
    }
}

/// First `DESCRIPTION_LIMIT` characters followed by `...`.
///
/// The marker is appended even when nothing was cut.
#[must_use]
pub fn truncate_description(description: &str) -> String {
    let mut short: String = description.chars().take(DESCRIPTION_LIMIT).collect();
    short.push_str(ELLIPSIS);
    short
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::game::GameId;

    fn sample_game(description: &str) -> Game {
        Game {
            id: GameId::new("42"),
            title: "Foo".to_string(),
            description: description.to_string(),
            image_url: "https://img.example/foo.png".to_string(),
            release: "01/01/2024".to_string(),
            platforms: vec!["PC".to_string()],
            categories: vec!["RPG".to_string()],
        }
    }

    #[test]
    fn long_description_is_cut_at_one_hundred_chars() {
        let long = "x".repeat(150);
        assert_eq!(truncate_description(&long), format!("{}...", "x".repeat(100)));
    }

    #[test]
    fn short_description_still_gets_the_marker() {
        assert_eq!(truncate_description("short"), "short...");
        assert_eq!(truncate_description(""), "...");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let accented = "é".repeat(120);
        let short = truncate_description(&accented);
        assert_eq!(short.chars().count(), 103);
        assert!(short.starts_with(&"é".repeat(100)));
    }

    #[test]
    fn game_metadata_carries_title_image_and_robots() {
        let meta = PageMetadata::for_game(&sample_game(&"y".repeat(130)));
        assert_eq!(meta.title, "Foo");
        assert_eq!(meta.description.as_deref(), Some(format!("{}...", "y".repeat(100)).as_str()));
        let og = meta.open_graph.expect("open graph");
        assert_eq!(og.title, "Foo");
        assert_eq!(og.images, vec!["https://img.example/foo.png".to_string()]);
        let robots = meta.robots.expect("robots");
        assert_eq!(robots.content(), "index, follow, nocache");
        assert_eq!(robots.google_bot.content(), "index, follow, noimageindex");
    }

    #[test]
    fn fallback_has_only_a_title() {
        let meta = PageMetadata::fallback();
        assert_eq!(meta.title, FALLBACK_TITLE);
        assert!(meta.description.is_none());
        assert!(meta.open_graph.is_none());
        assert!(meta.robots.is_none());
    }
}
