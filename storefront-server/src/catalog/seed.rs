//! Built-in data used when no catalog file is configured

use shared::models::{FollowMap, OpeningHours, Shop, ShopHours, ShopKind};

fn shop(
    id: i64,
    name: &str,
    kind: ShopKind,
    category: &str,
    rating: f32,
    hours: OpeningHours,
) -> Shop {
    Shop {
        id,
        name: name.to_string(),
        kind,
        category: category.to_string(),
        address: None,
        phone: None,
        rating: Some(rating),
        hours,
    }
}

fn weekdays(open: &str, close: &str) -> OpeningHours {
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"]
        .into_iter()
        .map(|day| ShopHours {
            day: day.to_string(),
            open: open.to_string(),
            close: close.to_string(),
        })
        .collect::<Vec<_>>()
        .into()
}

pub fn shops() -> Vec<Shop> {
    vec![
        shop(1, "Fashion Hub", ShopKind::Shop, "Clothing", 4.8, "9:00 AM - 9:00 PM".into()),
        shop(
            2,
            "Textile Mart",
            ShopKind::Wholesaler,
            "Wholesale",
            4.7,
            weekdays("8:00 AM", "6:00 PM"),
        ),
        shop(3, "Café Delight", ShopKind::Shop, "Restaurant", 4.6, "7:00 AM - 8:00 PM".into()),
        shop(4, "Style Studio", ShopKind::Service, "Salon", 4.9, "10:00 AM - 7:00 PM".into()),
        shop(5, "Gadget World", ShopKind::Shop, "Electronics", 4.5, "10:00 AM - 8:00 PM".into()),
        shop(6, "Fresh Market", ShopKind::Shop, "Groceries", 4.4, "6:00 AM - 9:00 PM".into()),
        shop(7, "Night Owl Bar", ShopKind::Shop, "Bar", 4.3, "6:00 PM - 2:00 AM".into()),
    ]
}

/// Accounts shown in the feed and whether they start out followed
pub fn follow_map() -> FollowMap {
    FollowMap::from([
        ("u1".to_string(), false),
        ("u2".to_string(), true),
        ("u3".to_string(), false),
        ("u4".to_string(), false),
    ])
}
