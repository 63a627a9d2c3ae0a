//! Статический контент маркетинговых страниц: выставки, события и
//! коллекции музея. Редактируется вместе с контент-отделом, поэтому
//! лежит кодом, а не в базе.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Exhibition {
    pub id: i64,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpcomingExhibition {
    pub id: i64,
    pub title: &'static str,
    pub date: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MuseumEvent {
    pub id: i64,
    pub title: &'static str,
    pub category: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub capacity: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionArea {
    pub id: i64,
    pub title: &'static str,
    pub period: &'static str,
    pub count: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub periods: &'static [&'static str],
}

pub const EXHIBITIONS: [Exhibition; 3] = [
    Exhibition {
        id: 1,
        title: "Pattachitra Heritage",
        subtitle: "Traditional Art of Odisha",
        date: "Through December 31, 2024",
        description: "Explore the ancient art of Pattachitra, traditional cloth-based scroll \
                      painting from Odisha. This comprehensive exhibition showcases over 100 \
                      masterpieces depicting mythological narratives and folk tales.",
        location: "Main Gallery",
    },
    Exhibition {
        id: 2,
        title: "Classical Indian Dance",
        subtitle: "Expressions of Divine Movement",
        date: "Through January 15, 2025",
        description: "Journey through India's rich tradition of classical dance forms including \
                      Bharatanatyam, Kathak, Odissi, and Kuchipudi. Experience the spiritual and \
                      artistic heritage through sculptures, paintings, and live performances.",
        location: "East Wing",
    },
    Exhibition {
        id: 3,
        title: "Warli Folk Art",
        subtitle: "Tribal Heritage of Maharashtra",
        date: "Through March 1, 2025",
        description: "Discover the ancient Warli painting tradition of Maharashtra's tribal \
                      communities. These geometric art forms tell stories of daily life, nature, \
                      and spirituality through simple yet profound imagery.",
        location: "Folk Art Gallery",
    },
];

pub const UPCOMING_EXHIBITIONS: [UpcomingExhibition; 2] = [
    UpcomingExhibition {
        id: 4,
        title: "Outdoor Art Installations",
        date: "Opening April 15, 2024",
        description: "Contemporary Indian art in natural settings",
    },
    UpcomingExhibition {
        id: 5,
        title: "Traditional Craft Revival",
        date: "Opening May 1, 2024",
        description: "Master craftsmen preserving ancient techniques",
    },
];

pub const EVENT_CATEGORIES: [&str; 6] = [
    "All Events",
    "Exhibitions",
    "Lectures",
    "Workshops",
    "Special Events",
    "Member Events",
];

pub const EVENTS: [MuseumEvent; 3] = [
    MuseumEvent {
        id: 1,
        title: "Art After Dark",
        category: "Special Event",
        date: "March 15, 2024",
        time: "6:00 PM - 9:00 PM",
        location: "Main Gallery",
        description: "Join us for an evening of Indian classical music performances among the \
                      art collections. Experience the harmony of visual and musical arts with \
                      renowned musicians in an atmospheric setting.",
        price: "\u{20b9}2000",
        capacity: "200 people",
    },
    MuseumEvent {
        id: 2,
        title: "Interactive Art Experience",
        category: "Workshop",
        date: "March 20, 2024",
        time: "2:00 PM - 3:30 PM",
        location: "Education Center",
        description: "Engage with art through interactive sessions where visitors can touch, \
                      feel, and understand the techniques behind traditional Indian art forms. \
                      Perfect for art enthusiasts of all ages.",
        price: "Free with admission",
        capacity: "150 people",
    },
    MuseumEvent {
        id: 3,
        title: "Udaya Kala - Art at Sunrise",
        category: "Cultural Event",
        date: "March 23, 2024",
        time: "6:00 AM - 8:00 AM",
        location: "Outdoor Pavilion",
        description: "Experience the beauty of Indian art as the sun rises. This unique event \
                      combines traditional art appreciation with the serenity of dawn, featuring \
                      live painting demonstrations.",
        price: "\u{20b9}1500 per person",
        capacity: "100 people",
    },
];

pub const COLLECTIONS: [CollectionArea; 3] = [
    CollectionArea {
        id: 1,
        title: "Pattachitra Art & Heritage",
        period: "15th Century-Present",
        count: "2,500+ Works",
        description: "A comprehensive collection of Pattachitra paintings from Odisha, \
                      showcasing traditional cloth-based scroll paintings with mythological and \
                      folk narratives",
        highlights: &[
            "Traditional Jagannath Paintings",
            "Ramayana and Mahabharata Scrolls",
            "Contemporary Pattachitra Interpretations",
            "Master Artist Collaborations",
        ],
        periods: &[
            "Traditional Period",
            "Colonial Revival",
            "Modern Adaptations",
            "Contemporary Works",
        ],
    },
    CollectionArea {
        id: 2,
        title: "Warli Tribal Art",
        period: "Ancient to Contemporary",
        count: "1,800+ Works",
        description: "Ancient geometric art traditions from Maharashtra's tribal communities, \
                      depicting daily life, nature, and spiritual beliefs",
        highlights: &[
            "Traditional Warli Circle Paintings",
            "Harvest Festival Depictions",
            "Nature and Wildlife Themes",
            "Contemporary Warli Adaptations",
        ],
        periods: &[
            "Ancient Traditions",
            "Colonial Documentation",
            "Modern Revival",
            "Contemporary Art",
        ],
    },
    CollectionArea {
        id: 3,
        title: "Madhubani Folk Art",
        period: "Traditional to Modern",
        count: "2,200+ Works",
        description: "Vibrant folk paintings from Bihar featuring mythological themes, nature \
                      motifs, and festival celebrations in distinctive geometric patterns",
        highlights: &[
            "Traditional Kohbar Paintings",
            "Festival and Ritual Art",
            "Nature and Animal Motifs",
            "Modern Madhubani Interpretations",
        ],
        periods: &[
            "Traditional Folk",
            "Cultural Revival",
            "Contemporary Fusion",
            "International Recognition",
        ],
    },
];
