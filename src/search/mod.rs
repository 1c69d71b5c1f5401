//! Catalog and feed filtering.
//!
//! Every active predicate in a [`FilterCriteria`] must hold for a record to
//! survive, and survivors keep their input order. The current date is passed
//! in by the caller so results are reproducible.

mod date;

use std::borrow::Borrow;

use chrono::NaiveDate;

use crate::models::{Event, FilterCriteria, Post};

pub use date::DateWindow;

pub struct EventSearchFilter<'c> {
    criteria: &'c FilterCriteria,
    query: Option<String>,
    window: Option<DateWindow>,
}

impl<'c> EventSearchFilter<'c> {
    pub fn new(criteria: &'c FilterCriteria, today: NaiveDate) -> Self {
        Self {
            criteria,
            query: criteria.query.as_deref().map(str::to_lowercase),
            window: DateWindow::for_bucket(criteria.date, today),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        self.criteria
    }

    pub fn matches(&self, event: &Event) -> bool {
        let text_ok = match self.query.as_deref() {
            Some(query) => event_text_contains(event, query),
            None => true,
        };

        text_ok && self.matches_event_fields(event)
    }

    /// Judges a feed post. `event` is the post's resolved event reference,
    /// `None` when the post has none or it points at an unknown id.
    pub fn matches_post(&self, post: &Post, event: Option<&Event>) -> bool {
        match event {
            Some(event) => {
                let text_ok = match self.query.as_deref() {
                    Some(query) => {
                        contains_lowercase(&post.content, query)
                            || event_text_contains(event, query)
                    }
                    None => true,
                };
                text_ok && self.matches_event_fields(event)
            }
            None => {
                if self.criteria.needs_event() {
                    return false;
                }
                self.query
                    .as_deref()
                    .map_or(true, |query| contains_lowercase(&post.content, query))
            }
        }
    }

    pub fn apply<E>(&self, events: impl IntoIterator<Item = E>) -> Vec<E>
    where
        E: Borrow<Event>,
    {
        events
            .into_iter()
            .filter(|event| self.matches(event.borrow()))
            .collect()
    }

    /// Filters posts, resolving each one's event against `catalog`.
    pub fn apply_posts<P>(&self, posts: impl IntoIterator<Item = P>, catalog: &[Event]) -> Vec<P>
    where
        P: Borrow<Post>,
    {
        posts
            .into_iter()
            .filter(|post| {
                let post = post.borrow();
                self.matches_post(post, resolve_event(catalog, post))
            })
            .collect()
    }

    fn matches_event_fields(&self, event: &Event) -> bool {
        let criteria = self.criteria;

        criteria
            .category
            .map_or(true, |category| event.category == category)
            && criteria
                .genre
                .as_deref()
                .map_or(true, |genre| event.genre == genre)
            && criteria
                .location
                .as_deref()
                .map_or(true, |location| event.location.contains(location))
            && self.window.map_or(true, |window| window.contains(event.date))
    }
}

pub fn filter_events<E>(
    events: impl IntoIterator<Item = E>,
    criteria: &FilterCriteria,
    today: NaiveDate,
) -> Vec<E>
where
    E: Borrow<Event>,
{
    EventSearchFilter::new(criteria, today).apply(events)
}

pub fn filter_posts<P>(
    posts: impl IntoIterator<Item = P>,
    catalog: &[Event],
    criteria: &FilterCriteria,
    today: NaiveDate,
) -> Vec<P>
where
    P: Borrow<Post>,
{
    EventSearchFilter::new(criteria, today).apply_posts(posts, catalog)
}

pub fn resolve_event<'e>(catalog: &'e [Event], post: &Post) -> Option<&'e Event> {
    let event_id = post.event_id.as_deref()?;
    catalog.iter().find(|event| event.id == event_id)
}

fn event_text_contains(event: &Event, query: &str) -> bool {
    contains_lowercase(&event.title, query)
        || contains_lowercase(&event.description, query)
        || contains_lowercase(&event.location, query)
}

// `needle` is already lowercase.
fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Coordinates, DateBucket, UserSummary};
    use chrono::{Days, TimeZone, Utc};
    use rust_decimal::Decimal;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 15).unwrap()
    }

    fn organizer() -> UserSummary {
        UserSummary {
            id: "org-1".into(),
            name: "Kulturhuset".into(),
            avatar: String::new(),
        }
    }

    fn event(
        id: &str,
        title: &str,
        category: Category,
        genre: &str,
        location: &str,
        date: NaiveDate,
    ) -> Event {
        Event {
            id: id.into(),
            title: title.into(),
            description: format!("{title} live on stage"),
            date,
            time: "19:00".into(),
            location: location.into(),
            category,
            genre: genre.into(),
            price: Decimal::new(350, 0),
            currency: "SEK".into(),
            image_url: String::new(),
            organizer: organizer(),
            attendees: 10,
            is_sponsored: false,
            coordinates: Coordinates::STOCKHOLM,
        }
    }

    fn hamlet() -> Event {
        event(
            "1",
            "Hamlet",
            Category::Theater,
            "drama",
            "Dramaten, Stockholm",
            today(),
        )
    }

    fn jazz_night() -> Event {
        event(
            "2",
            "Jazz Night",
            Category::Music,
            "jazz",
            "Fasching, Stockholm",
            today().checked_add_days(Days::new(10)).unwrap(),
        )
    }

    fn catalog() -> Vec<Event> {
        vec![hamlet(), jazz_night()]
    }

    fn post(id: &str, content: &str, event_id: Option<&str>) -> Post {
        Post {
            id: id.into(),
            author: organizer(),
            content: content.into(),
            event_id: event_id.map(Into::into),
            timestamp: Utc.with_ymd_and_hms(2024, 12, 14, 18, 30, 0).unwrap(),
            likes: 0,
            comments: 0,
        }
    }

    fn titles(events: &[&Event]) -> Vec<String> {
        events.iter().map(|e| e.title.clone()).collect()
    }

    fn criteria_grid() -> Vec<FilterCriteria> {
        let base = FilterCriteria::default();
        vec![
            base.clone(),
            base.clone().with_query("jazz"),
            base.clone().with_query("STOCKHOLM"),
            base.clone().with_query("nothing matches this"),
            base.clone().with_category(Category::Theater),
            base.clone().with_category(Category::Music).with_genre("jazz"),
            base.clone().with_genre("drama"),
            base.clone().with_location("Fasching"),
            base.clone().with_date(DateBucket::Today),
            base.clone().with_date(DateBucket::Week),
            base.clone().with_date(DateBucket::Month),
            base.clone()
                .with_query("night")
                .with_date(DateBucket::Month)
                .with_location("Stockholm"),
        ]
    }

    #[test]
    fn test_category_filter_keeps_only_theater() {
        let events = catalog();
        let criteria = FilterCriteria::default().with_category(Category::Theater);

        let result = filter_events(&events, &criteria, today());
        assert_eq!(titles(&result), vec!["Hamlet"]);
    }

    #[test]
    fn test_query_matches_title_case_insensitively() {
        let events = catalog();

        for query in ["jazz", "JAZZ", "JaZz"] {
            let criteria = FilterCriteria::default().with_query(query);
            let result = filter_events(&events, &criteria, today());
            assert_eq!(titles(&result), vec!["Jazz Night"], "query {query}");
        }
    }

    #[test]
    fn test_query_matches_description_and_location() {
        let events = catalog();

        let by_location = FilterCriteria::default().with_query("dramaten");
        assert_eq!(
            titles(&filter_events(&events, &by_location, today())),
            vec!["Hamlet"]
        );

        let by_description = FilterCriteria::default().with_query("on stage");
        assert_eq!(filter_events(&events, &by_description, today()).len(), 2);
    }

    #[test]
    fn test_location_filter_is_substring_containment() {
        let events = catalog();
        let criteria = FilterCriteria::default().with_location("Fasching");

        let result = filter_events(&events, &criteria, today());
        assert_eq!(titles(&result), vec!["Jazz Night"]);
    }

    #[test]
    fn test_week_bucket_excludes_events_ten_days_out() {
        let events = catalog();
        let criteria = FilterCriteria::default().with_date(DateBucket::Week);

        let result = filter_events(&events, &criteria, today());
        assert_eq!(titles(&result), vec!["Hamlet"]);

        let month = FilterCriteria::default().with_date(DateBucket::Month);
        assert_eq!(filter_events(&events, &month, today()).len(), 2);
    }

    #[test]
    fn test_today_bucket_ignores_time_of_day() {
        let mut late = hamlet();
        late.time = "23:59".into();
        let mut early = hamlet();
        early.id = "3".into();
        early.time = "00:00".into();
        let events = vec![late, early];

        let criteria = FilterCriteria::default().with_date(DateBucket::Today);
        assert_eq!(filter_events(&events, &criteria, today()).len(), 2);
    }

    #[test]
    fn test_past_events_are_outside_every_bucket_but_all() {
        let mut past = hamlet();
        past.date = today().checked_sub_days(Days::new(1)).unwrap();
        let events = vec![past];

        for bucket in [DateBucket::Today, DateBucket::Week, DateBucket::Month] {
            let criteria = FilterCriteria::default().with_date(bucket);
            assert!(filter_events(&events, &criteria, today()).is_empty());
        }
        let all = FilterCriteria::default().with_date(DateBucket::All);
        assert_eq!(filter_events(&events, &all, today()).len(), 1);
    }

    #[test]
    fn test_inactive_criteria_return_input_unchanged() {
        let events = vec![jazz_night(), hamlet(), jazz_night()];
        let result = filter_events(events.clone(), &FilterCriteria::default(), today());
        assert_eq!(result, events);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let events = catalog();
        for criteria in criteria_grid() {
            let once = filter_events(events.clone(), &criteria, today());
            let twice = filter_events(once.clone(), &criteria, today());
            assert_eq!(once, twice, "criteria {criteria:?}");
        }
    }

    #[test]
    fn test_output_is_sound_complete_and_ordered() {
        let mut events = catalog();
        events.push(event(
            "3",
            "Swan Lake",
            Category::Ballet,
            "klassisk",
            "Operan, Stockholm",
            today().checked_add_days(Days::new(3)).unwrap(),
        ));
        events.push(event(
            "4",
            "Jazz Brunch",
            Category::Music,
            "jazz",
            "Stampen, Göteborg",
            today(),
        ));

        for criteria in criteria_grid() {
            let filter = EventSearchFilter::new(&criteria, today());
            let result = filter.apply(&events);

            assert!(result.iter().all(|e| filter.matches(e)), "{criteria:?}");

            let expected: Vec<&Event> = events.iter().filter(|e| filter.matches(e)).collect();
            assert_eq!(result, expected, "{criteria:?}");

            let positions: Vec<usize> = result
                .iter()
                .map(|r| events.iter().position(|e| e.id == r.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{criteria:?}");
        }
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let events = catalog();
        let criteria = FilterCriteria::default().with_category(Category::Opera);
        assert!(filter_events(&events, &criteria, today()).is_empty());
    }

    #[test]
    fn test_post_with_missing_event_is_dropped_by_event_filters() {
        let events = catalog();
        let posts = vec![post("p1", "Can't wait!", Some("404"))];

        let by_category = FilterCriteria::default().with_category(Category::Theater);
        assert!(filter_posts(&posts, &events, &by_category, today()).is_empty());

        let by_date = FilterCriteria::default().with_date(DateBucket::Month);
        assert!(filter_posts(&posts, &events, &by_date, today()).is_empty());

        let none = FilterCriteria::default();
        assert_eq!(filter_posts(&posts, &events, &none, today()).len(), 1);
    }

    #[test]
    fn test_post_with_missing_event_survives_text_query_on_content() {
        let events = catalog();
        let posts = vec![
            post("p1", "Best evening this year", None),
            post("p2", "Meh", Some("404")),
        ];

        let criteria = FilterCriteria::default().with_query("EVENING");
        let result = filter_posts(&posts, &events, &criteria, today());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "p1");
    }

    #[test]
    fn test_posts_follow_their_event() {
        let events = catalog();
        let posts = vec![
            post("p1", "To be or not to be", Some("1")),
            post("p2", "Swinging", Some("2")),
            post("p3", "General thoughts", None),
        ];

        let theater = FilterCriteria::default().with_category(Category::Theater);
        let result = filter_posts(&posts, &events, &theater, today());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "p1");

        let week = FilterCriteria::default().with_date(DateBucket::Week);
        let ids: Vec<&str> = filter_posts(&posts, &events, &week, today())
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["p1"]);

        let query = FilterCriteria::default().with_query("fasching");
        let ids: Vec<&str> = filter_posts(&posts, &events, &query, today())
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["p2"]);
    }

    #[test]
    fn test_resolve_event_by_id() {
        let events = catalog();
        assert_eq!(
            resolve_event(&events, &post("p", "", Some("2"))).map(|e| e.title.as_str()),
            Some("Jazz Night")
        );
        assert!(resolve_event(&events, &post("p", "", Some("9"))).is_none());
        assert!(resolve_event(&events, &post("p", "", None)).is_none());
    }
}
