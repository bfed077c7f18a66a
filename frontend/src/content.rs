//! Built-in page content used whenever the remote catalog is empty or unreachable.

use crate::api::{Product, ProductColor, StoreMap};
use leptos::*;

pub const NIGERIAN_STATES: [&str; 37] = [
    "Abia",
    "Adamawa",
    "Akwa Ibom",
    "Anambra",
    "Bauchi",
    "Bayelsa",
    "Benue",
    "Borno",
    "Cross River",
    "Delta",
    "Ebonyi",
    "Edo",
    "Ekiti",
    "Enugu",
    "FCT - Abuja",
    "Gombe",
    "Imo",
    "Jigawa",
    "Kaduna",
    "Kano",
    "Katsina",
    "Kebbi",
    "Kogi",
    "Kwara",
    "Lagos",
    "Nasarawa",
    "Niger",
    "Ogun",
    "Ondo",
    "Osun",
    "Oyo",
    "Plateau",
    "Rivers",
    "Sokoto",
    "Taraba",
    "Yobe",
    "Zamfara",
];

/// Shown by the per-state lookup when nothing more specific is known.
pub const NATIONWIDE_AVAILABILITY: &str = "Available at major pharmacies and convenience stores";

fn product(
    id: &str,
    name: &str,
    variant: &str,
    color: ProductColor,
    features: [&str; 4],
    description: &str,
) -> Product {
    Product {
        id: id.into(),
        name: name.into(),
        variant: variant.into(),
        color,
        features: features.iter().map(|f| f.to_string()).collect(),
        description: description.into(),
    }
}

pub fn default_products() -> Vec<Product> {
    vec![
        product(
            "xtra",
            "Fire Xtra",
            "Longer Lasting Pleasure",
            ProductColor::Blue,
            [
                "Super-dotted texture",
                "Flavored for enhanced taste",
                "Extra time lubricant",
                "3 condoms per pack",
            ],
            "Designed for extended pleasure with super-dotted texture and extra time lubricant.",
        ),
        product(
            "xtacy",
            "Fire Xtacy",
            "Greater Stimulation",
            ProductColor::Green,
            [
                "Contoured design",
                "Flavored for pleasure",
                "Ribbed & studded",
                "3 condoms per pack",
            ],
            "Contoured design with ribbed and studded texture for maximum stimulation.",
        ),
        product(
            "xotica",
            "Fire Xotica",
            "More Intensity",
            ProductColor::Red,
            [
                "Contoured design",
                "Strawberry flavored",
                "Ribbed texture",
                "Super dotted",
            ],
            "Strawberry flavored with super dotted and ribbed texture for intense pleasure.",
        ),
    ]
}

pub fn default_store_locations() -> StoreMap {
    let entries: [(&str, &[&str]); 5] = [
        (
            "Lagos",
            &[
                "Shoprite Ikeja",
                "Justrite Pharmacy VI",
                "Mega Plaza Pharmacy",
                "HealthPlus Pharmacy",
                "All major pharmacies",
            ],
        ),
        (
            "Abuja",
            &[
                "Sahad Stores",
                "Next Cash & Carry",
                "Justrite Pharmacy",
                "All convenience stores",
            ],
        ),
        (
            "Port Harcourt",
            &["Shop N Save", "Major pharmacies", "Convenience stores"],
        ),
        ("Kano", &["Selected pharmacies", "Major retail outlets"]),
        ("Ibadan", &["Major pharmacies", "Convenience stores"]),
    ];
    entries
        .iter()
        .map(|(region, outlets)| {
            (
                region.to_string(),
                outlets.iter().map(|o| o.to_string()).collect(),
            )
        })
        .collect()
}

/// Immutable fallback tables handed to the landing page.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub states: &'static [&'static str],
    pub products: Vec<Product>,
    pub store_locations: StoreMap,
}

impl SiteContent {
    pub fn defaults() -> Self {
        Self {
            states: &NIGERIAN_STATES,
            products: default_products(),
            store_locations: default_store_locations(),
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::defaults()
    }
}

pub fn use_site_content() -> SiteContent {
    use_context::<SiteContent>().unwrap_or_default()
}
