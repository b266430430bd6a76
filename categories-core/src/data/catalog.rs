use crate::models::Category;

/// The category directory, in display order. Fixed for the lifetime of the process.
static CATEGORIES: &[Category] = &[
    Category {
        id: 1,
        name: "Electronics",
        description: "Electronic devices and accessories",
    },
    Category {
        id: 2,
        name: "Computers",
        description: "Laptops, desktops, and computer parts",
    },
    Category {
        id: 3,
        name: "Peripherals",
        description: "Keyboards, mice, and other peripherals",
    },
    Category {
        id: 4,
        name: "Audio",
        description: "Headphones, speakers, and audio equipment",
    },
    Category {
        id: 5,
        name: "Displays",
        description: "Monitors and display devices",
    },
];

/// All categories, in order.
pub fn all() -> &'static [Category] {
    CATEGORIES
}

/// Find the first category with the given id.
/// Any integer is accepted; ids outside the directory simply don't match.
pub fn find(id: i64) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| i64::from(c.id) == id)
}
