//! Demo content written into an empty store on first start

use crate::model::{AspectRatio, Category, ImageItem, Project, Service, SiteSettings, Testimonial};

pub fn settings() -> SiteSettings {
    SiteSettings {
        photographer_name: "Elena Vore".into(),
        short_bio: "Capturing the raw elegance of moments. Specializing in editorial, wedding, \
                    and portrait photography with a natural light aesthetic."
            .into(),
        email: "contact@elenavore.com".into(),
        phone: "+1 (555) 012-3456".into(),
        instagram: Some("elenavore_ph".into()),
        behance: Some("elenavore".into()),
    }
}

pub fn categories() -> Vec<Category> {
    [
        ("1", "Weddings", "weddings"),
        ("2", "Portraits", "portraits"),
        ("3", "Editorial", "editorial"),
        ("4", "Events", "events"),
    ]
    .into_iter()
    .map(|(id, name, slug)| Category {
        id: id.into(),
        name: name.into(),
        slug: slug.into(),
    })
    .collect()
}

fn picsum(id: u32, w: u32, h: u32) -> String {
    format!("https://picsum.photos/id/{}/{}/{}", id, w, h)
}

fn gallery(images: &[(&str, u32, (u32, u32), AspectRatio)]) -> Vec<ImageItem> {
    images
        .iter()
        .map(|&(id, photo, (w, h), aspect)| ImageItem::new(id, picsum(photo, w, h)).with_aspect(aspect))
        .collect()
}

pub fn projects() -> Vec<Project> {
    use AspectRatio::*;
    const TALL: (u32, u32) = (1200, 1800);
    const WIDE: (u32, u32) = (1200, 800);

    vec![
        Project {
            id: "1".into(),
            slug: "coastal-wedding-anna-mark".into(),
            title: "Anna & Mark".into(),
            category: "Weddings".into(),
            date: "2023-09-12".into(),
            location: "Amalfi Coast, Italy".into(),
            description: "An intimate celebration overlooking the Mediterranean sea. The focus \
                          was on candid emotion and the golden hour light."
                .into(),
            cover_image: picsum(10, 800, 1200),
            images: gallery(&[
                ("p1-1", 10, TALL, Portrait),
                ("p1-2", 11, WIDE, Landscape),
                ("p1-3", 12, (1000, 1000), Square),
                ("p1-4", 13, WIDE, Landscape),
                ("p1-5", 14, (800, 1200), Portrait),
            ]),
        },
        Project {
            id: "2".into(),
            slug: "vogue-urban-editorial".into(),
            title: "Urban Shadows".into(),
            category: "Editorial".into(),
            date: "2024-01-15".into(),
            location: "New York, NY".into(),
            description: "A high-contrast fashion editorial exploring the interplay of \
                          architecture and modern street style."
                .into(),
            cover_image: picsum(20, 800, 1200),
            images: gallery(&[
                ("p2-1", 20, TALL, Portrait),
                ("p2-2", 21, TALL, Portrait),
                ("p2-3", 24, WIDE, Landscape),
            ]),
        },
        Project {
            id: "3".into(),
            slug: "sarah-portrait-session".into(),
            title: "Sarah in Studio".into(),
            category: "Portraits".into(),
            date: "2024-03-10".into(),
            location: "London Studio".into(),
            description: "Minimalist studio portraits using a single light source to create \
                          depth and drama."
                .into(),
            cover_image: picsum(64, 800, 1200),
            images: gallery(&[("p3-1", 64, TALL, Portrait), ("p3-2", 65, TALL, Portrait)]),
        },
    ]
}

pub fn services() -> Vec<Service> {
    [
        (
            "1",
            "Wedding Photography",
            "Full day coverage, 2 photographers, online gallery.",
            "From $3,500",
        ),
        (
            "2",
            "Portrait Session",
            "2 hours on location or studio, 20 retouched images.",
            "$600",
        ),
        (
            "3",
            "Editorial / Commercial",
            "Full production support, licensing included.",
            "Inquire",
        ),
    ]
    .into_iter()
    .map(|(id, title, description, price)| Service {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        price_display: price.into(),
    })
    .collect()
}

/// Client quotes shown on the about page
pub fn testimonials(photographer: &str) -> Vec<Testimonial> {
    (1..=3)
        .map(|i| Testimonial {
            id: i.to_string(),
            client: "Client Name".into(),
            text: format!(
                "Absolutely breathtaking work. {} has an incredible eye for detail and made \
                 us feel so comfortable.",
                photographer
            ),
            role: None,
        })
        .collect()
}
