//! Badge tones and display labels for the news feed and blog list.

use chrono::NaiveDate;

use crate::content::{BlogPost, NewsArticle};

/// Color family for a category or tag badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryTone {
    Orange,
    Blue,
    Purple,
    Green,
    Yellow,
    Cyan,
    Red,
    Emerald,
    Gray,
}

impl CategoryTone {
    /// Tone for an article category or blog tag. Unknown labels are gray.
    pub fn for_label(label: &str) -> Self {
        match label {
            "Bitcoin" => CategoryTone::Orange,
            "Ethereum" => CategoryTone::Blue,
            "DeFi" => CategoryTone::Purple,
            "CBDC" => CategoryTone::Green,
            "Trading" => CategoryTone::Yellow,
            "Technology" => CategoryTone::Cyan,
            "Security" => CategoryTone::Red,
            "Investment" => CategoryTone::Emerald,
            _ => CategoryTone::Gray,
        }
    }

    /// CSS modifier class (`tone-orange`, ...)
    pub fn class(&self) -> &'static str {
        match self {
            CategoryTone::Orange => "tone-orange",
            CategoryTone::Blue => "tone-blue",
            CategoryTone::Purple => "tone-purple",
            CategoryTone::Green => "tone-green",
            CategoryTone::Yellow => "tone-yellow",
            CategoryTone::Cyan => "tone-cyan",
            CategoryTone::Red => "tone-red",
            CategoryTone::Emerald => "tone-emerald",
            CategoryTone::Gray => "tone-gray",
        }
    }
}

impl NewsArticle {
    pub fn tone(&self) -> CategoryTone {
        CategoryTone::for_label(self.category)
    }

    /// "2 hours ago"
    pub fn age_label(&self) -> String {
        match self.hours_ago {
            0 => "just now".to_string(),
            1 => "1 hour ago".to_string(),
            n => format!("{} hours ago", n),
        }
    }
}

impl BlogPost {
    pub fn date(&self) -> Option<NaiveDate> {
        let (year, month, day) = self.published_on;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// "Dec 15, 2024"
    pub fn date_label(&self) -> String {
        match self.date() {
            Some(date) => date.format("%b %-d, %Y").to_string(),
            None => String::new(),
        }
    }

    /// "8 min read"
    pub fn read_time_label(&self) -> String {
        format!("{} min read", self.read_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{BLOG_POSTS, NEWS_ARTICLES};

    #[test]
    fn test_known_tones() {
        assert_eq!(CategoryTone::for_label("Bitcoin"), CategoryTone::Orange);
        assert_eq!(CategoryTone::for_label("CBDC"), CategoryTone::Green);
        assert_eq!(CategoryTone::for_label("Investment"), CategoryTone::Emerald);
    }

    #[test]
    fn test_unknown_tone_is_gray() {
        assert_eq!(CategoryTone::for_label("Beginner"), CategoryTone::Gray);
        assert_eq!(CategoryTone::for_label("bitcoin"), CategoryTone::Gray);
        assert_eq!(CategoryTone::for_label(""), CategoryTone::Gray);
        assert_eq!(CategoryTone::Gray.class(), "tone-gray");
    }

    #[test]
    fn test_every_article_category_has_a_tone() {
        for article in NEWS_ARTICLES {
            assert_ne!(article.tone(), CategoryTone::Gray, "{}", article.category);
        }
    }

    #[test]
    fn test_age_label() {
        assert_eq!(NEWS_ARTICLES[0].age_label(), "2 hours ago");
        let mut article = NEWS_ARTICLES[0];
        article.hours_ago = 1;
        assert_eq!(article.age_label(), "1 hour ago");
    }

    #[test]
    fn test_blog_labels() {
        let post = &BLOG_POSTS[0];
        assert_eq!(post.date_label(), "Dec 15, 2024");
        assert_eq!(post.read_time_label(), "8 min read");
        assert_eq!(BLOG_POSTS[2].read_time_label(), "12 min read");
    }

    #[test]
    fn test_only_first_post_is_featured() {
        let featured: Vec<_> = BLOG_POSTS.iter().filter(|p| p.featured).map(|p| p.id).collect();
        assert_eq!(featured, [1]);
    }
}
