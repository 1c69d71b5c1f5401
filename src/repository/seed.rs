//! Mock catalog served by the in-memory store.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;

use crate::models::{Category, Coordinates, Event, Post, User, UserSummary};

fn summary(id: &str, name: &str, avatar: &str) -> UserSummary {
    UserSummary {
        id: id.into(),
        name: name.into(),
        avatar: avatar.into(),
    }
}

fn john() -> UserSummary {
    summary(
        "1",
        "John Doe",
        "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop",
    )
}

fn maria() -> UserSummary {
    summary(
        "2",
        "Maria Lindqvist",
        "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100&h=100&fit=crop",
    )
}

fn erik() -> UserSummary {
    summary(
        "3",
        "Erik Svensson",
        "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=100&h=100&fit=crop",
    )
}

fn dramaten() -> UserSummary {
    summary(
        "org-dramaten",
        "Kungliga Dramatiska Teatern",
        "https://images.unsplash.com/photo-1503095396549-807759245b35?w=100&h=100&fit=crop",
    )
}

fn operan() -> UserSummary {
    summary(
        "org-operan",
        "Kungliga Operan",
        "https://images.unsplash.com/photo-1580809361436-42a7ec204889?w=100&h=100&fit=crop",
    )
}

fn after(anchor: NaiveDate, days: u64) -> NaiveDate {
    anchor.checked_add_days(Days::new(days)).unwrap_or(anchor)
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    title: &str,
    description: &str,
    date: NaiveDate,
    time: &str,
    location: &str,
    category: Category,
    genre: &str,
    price: i64,
    organizer: UserSummary,
    attendees: u32,
    is_sponsored: bool,
    (lat, lng): (f64, f64),
) -> Event {
    Event {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        date,
        time: time.into(),
        location: location.into(),
        category,
        genre: genre.into(),
        price: Decimal::new(price, 0),
        currency: "SEK".into(),
        image_url: format!("https://images.unsplash.com/evenemang-{id}?w=1080"),
        organizer,
        attendees,
        is_sponsored,
        coordinates: Coordinates { lat, lng },
    }
}

pub fn events(anchor: NaiveDate) -> Vec<Event> {
    vec![
        event(
            "1",
            "Hamlet",
            "Shakespeares klassiska tragedi i ny uppsättning på Stora scenen.",
            anchor,
            "19:00",
            "Dramaten, Stockholm",
            Category::Theater,
            "drama",
            450,
            dramaten(),
            320,
            true,
            (59.3326, 18.0771),
        ),
        event(
            "2",
            "Svansjön",
            "Tjajkovskijs älskade balett med Kungliga Baletten.",
            after(anchor, 2),
            "18:30",
            "Kungliga Operan, Stockholm",
            Category::Ballet,
            "klassisk",
            595,
            operan(),
            780,
            true,
            (59.3296, 18.0703),
        ),
        event(
            "3",
            "Fotoutställning: Nordiskt Ljus",
            "Samtida fotografi från Norden i stora utställningshallen.",
            after(anchor, 1),
            "11:00",
            "Fotografiska, Stockholm",
            Category::Arts,
            "fotografi",
            175,
            maria(),
            1200,
            false,
            (59.3178, 18.0852),
        ),
        event(
            "4",
            "La Traviata",
            "Verdis opera om kärlek och uppoffring.",
            after(anchor, 12),
            "19:30",
            "Kungliga Operan, Stockholm",
            Category::Opera,
            "klassisk",
            695,
            operan(),
            650,
            false,
            (59.3296, 18.0703),
        ),
        event(
            "5",
            "Jazz Night",
            "Kvällens jam session med stadens bästa jazzmusiker.",
            after(anchor, 10),
            "21:00",
            "Fasching, Stockholm",
            Category::Music,
            "jazz",
            250,
            john(),
            140,
            false,
            (59.3337, 18.0574),
        ),
        event(
            "6",
            "Skulpturer i Parken",
            "Utomhusvisning av modern skulptur, fri entré.",
            after(anchor, 5),
            "10:00",
            "Millesgården, Lidingö",
            Category::Arts,
            "skulptur",
            0,
            maria(),
            90,
            false,
            (59.3627, 18.1239),
        ),
        event(
            "7",
            "Stand Up Comedy Kväll",
            "Fem komiker, en scen och massor av skratt.",
            after(anchor, 3),
            "20:00",
            "Norra Brunn, Stockholm",
            Category::Comedy,
            "standup",
            220,
            john(),
            210,
            false,
            (59.3358, 18.0616),
        ),
        event(
            "8",
            "Mamma Mia!",
            "ABBA-musikalen som fortsätter att fylla salongen.",
            after(anchor, 25),
            "19:00",
            "China Teatern, Stockholm",
            Category::Theater,
            "musikal",
            795,
            maria(),
            1500,
            true,
            (59.3319, 18.0737),
        ),
        event(
            "9",
            "Samtidskonst på Moderna",
            "Nya förvärv och internationella gäster på Skeppsholmen.",
            after(anchor, 40),
            "11:00",
            "Moderna Museet, Stockholm",
            Category::Arts,
            "samtidskonst",
            150,
            maria(),
            400,
            false,
            (59.3262, 18.0847),
        ),
        event(
            "10",
            "Göteborgs Jazzfestival",
            "Två scener och tolv band under en kväll.",
            after(anchor, 7),
            "17:00",
            "Pustervik, Göteborg",
            Category::Music,
            "jazz",
            380,
            john(),
            520,
            false,
            (57.6995, 11.9526),
        ),
    ]
}

fn at(anchor: NaiveDate, days_before: u64, hour: u32, minute: u32) -> DateTime<Utc> {
    let day = anchor.checked_sub_days(Days::new(days_before)).unwrap_or(anchor);
    let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);
    day.and_time(time).and_utc()
}

pub fn posts(anchor: NaiveDate) -> Vec<Post> {
    vec![
        Post {
            id: "p1".into(),
            author: erik(),
            content: "Hamlet på Dramaten var helt fantastisk! Rekommenderas varmt.".into(),
            event_id: Some("1".into()),
            timestamp: at(anchor, 0, 9, 15),
            likes: 24,
            comments: 5,
        },
        Post {
            id: "p2".into(),
            author: maria(),
            content: "Sista veckan för Nordiskt Ljus, missa inte!".into(),
            event_id: Some("3".into()),
            timestamp: at(anchor, 1, 14, 0),
            likes: 41,
            comments: 8,
        },
        Post {
            id: "p3".into(),
            author: john(),
            content: "Vem följer med på jazz på Fasching?".into(),
            event_id: Some("5".into()),
            timestamp: at(anchor, 1, 20, 45),
            likes: 12,
            comments: 3,
        },
        Post {
            id: "p4".into(),
            author: erik(),
            content: "Bästa kulturhösten på länge i Stockholm.".into(),
            event_id: None,
            timestamp: at(anchor, 2, 11, 30),
            likes: 7,
            comments: 1,
        },
        Post {
            id: "p5".into(),
            author: john(),
            content: "Tack alla som kom på förhandsvisningen!".into(),
            event_id: Some("99".into()),
            timestamp: at(anchor, 3, 22, 10),
            likes: 18,
            comments: 2,
        },
    ]
}

pub fn users() -> Vec<User> {
    let user = |summary: UserSummary, email: &str, bio: &str, organizer: bool, paid: bool| User {
        id: summary.id,
        name: summary.name,
        email: email.into(),
        avatar: summary.avatar,
        bio: bio.into(),
        is_organizer: organizer,
        has_paid_plan: paid,
        followers: 0,
        following: 0,
        preferred_genres: Vec::new(),
    };

    let mut john = user(
        john(),
        "john@example.com",
        "Event enthusiast and music lover",
        true,
        false,
    );
    john.followers = 234;
    john.following = 189;

    let mut maria = user(
        maria(),
        "maria@example.com",
        "Curator of photography and contemporary art",
        true,
        true,
    );
    maria.followers = 1024;
    maria.following = 87;
    maria.preferred_genres = vec!["fotografi".into(), "samtidskonst".into()];

    let mut erik = user(erik(), "erik@example.com", "Teaterälskare", false, false);
    erik.following = 12;
    erik.preferred_genres = vec!["drama".into(), "jazz".into()];

    vec![john, maria, erik]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 15).unwrap()
    }

    #[test]
    fn test_seed_events_hold_invariants() {
        let events = events(anchor());
        let ids: HashSet<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), events.len());
        assert!(events.iter().all(Event::satisfies_invariants));
    }

    #[test]
    fn test_seed_posts_reference_known_and_unknown_events() {
        let events = events(anchor());
        let posts = posts(anchor());
        let dangling = posts
            .iter()
            .filter_map(|p| p.event_id.as_deref())
            .filter(|id| !events.iter().any(|e| e.id == *id))
            .count();
        assert_eq!(dangling, 1);
        assert!(posts.iter().any(|p| p.event_id.is_none()));
    }
}
