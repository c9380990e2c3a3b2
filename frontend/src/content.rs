/// A single page of static content: a service, an area or a guide.
///
/// Everything is baked in at build time and looked up by slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub slug: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
    pub content: &'static str,
}

impl Entry {
    /// Area titles are written as "Roofer in X"; cards and headings want just "X".
    pub fn area_name(&self) -> &'static str {
        self.title.strip_prefix("Roofer in ").unwrap_or(self.title)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Services,
    Areas,
    Guides,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Found(&'static Entry),
    NotFound { kind: ContentKind },
}

impl ContentKind {
    pub fn entries(self) -> &'static [Entry] {
        match self {
            ContentKind::Services => SERVICES,
            ContentKind::Areas => AREAS,
            ContentKind::Guides => GUIDES,
        }
    }

    pub fn find(self, slug: &str) -> Option<&'static Entry> {
        self.entries().iter().find(|e| e.slug == slug)
    }

    pub fn lookup(self, slug: &str) -> Lookup {
        match self.find(slug) {
            Some(entry) => Lookup::Found(entry),
            None => Lookup::NotFound { kind: self },
        }
    }

    /// Every entry of this kind except `slug`, in catalog order.
    pub fn others<'a>(self, slug: &'a str) -> impl Iterator<Item = &'static Entry> + 'a {
        self.entries().iter().filter(move |e| e.slug != slug)
    }

    pub fn hub_path(self) -> &'static str {
        match self {
            ContentKind::Services => "/services",
            ContentKind::Areas => "/areas",
            ContentKind::Guides => "/guides",
        }
    }

    pub fn detail_path(self, slug: &str) -> String {
        format!("{}/{}", self.hub_path(), slug)
    }

    pub fn hub_label(self) -> &'static str {
        match self {
            ContentKind::Services => "Services",
            ContentKind::Areas => "Areas",
            ContentKind::Guides => "Guides",
        }
    }

    pub fn not_found_title(self) -> &'static str {
        match self {
            ContentKind::Services => "Service not found",
            ContentKind::Areas => "Area not found",
            ContentKind::Guides => "Article not found",
        }
    }

    pub fn back_label(self) -> &'static str {
        match self {
            ContentKind::Services => "Back to services",
            ContentKind::Areas => "Back to areas",
            ContentKind::Guides => "Back to guides",
        }
    }
}

pub static SERVICES: &[Entry] = &[
    Entry {
        slug: "roof-repairs",
        title: "Roof Repairs",
        subtitle: "Leaks, slipped tiles and storm damage found and fixed properly, after a proper look.",
        image: "/services/roof-repairs.jpg",
        content: r#"<h2>Finding the real cause</h2>
<p>Water rarely comes in where the stain appears. We trace the leak back along the rafters, felt and flashing before we recommend anything.</p>
<h3>Common repairs</h3>
<ul>
<li>Replacing slipped, cracked or missing tiles and slates</li>
<li>Re-bedding and re-pointing ridge and hip tiles</li>
<li>Resealing around chimneys, vents and skylights</li>
<li>Patching felt and flat roof coverings</li>
</ul>
<p>Most repairs are finished in a day. You get a written quote before any work starts.</p>"#,
    },
    Entry {
        slug: "pitched-roof-replacement",
        title: "Pitched Roof Replacement",
        subtitle: "A full re-roof when repairs no longer make sense, with new membrane, battens and tiles.",
        image: "/services/pitched-roof-replacement.jpg",
        content: r#"<h2>When replacement is the right call</h2>
<p>If the tiles are porous, the battens are rotten or the felt has perished, patching just postpones the problem. We will tell you honestly which side of that line your roof is on.</p>
<h3>What a re-roof includes</h3>
<ul>
<li>Stripping the existing covering down to the rafters</li>
<li>Breathable membrane and treated battens</li>
<li>New tiles or slates matched to the street</li>
<li>New ridge, hips, valleys and leadwork</li>
</ul>"#,
    },
    Entry {
        slug: "flat-roof-replacement",
        title: "Flat Roof Replacement",
        subtitle: "EPDM rubber and felt systems for extensions, garages and dormers.",
        image: "/services/flat-roof-replacement.jpg",
        content: r#"<h2>Flat roofs that stay dry</h2>
<p>Ponding water, blistering felt and soft decking are the usual signs a flat roof has reached the end of its life.</p>
<p>We replace the deck where needed, add falls so water drains away and finish with a single-piece EPDM membrane or a torch-on felt system.</p>"#,
    },
    Entry {
        slug: "leadwork",
        title: "Leadwork and Lead Flashing",
        subtitle: "Chimney flashing, valleys and bay roofs dressed in code-grade lead.",
        image: "/services/leadwork.jpg",
        content: r#"<h2>Where roofs meet walls</h2>
<p>Most leaks start at a junction: chimney stacks, abutments and valleys. Properly sized and fixed lead keeps water out of those joins for decades.</p>
<ul>
<li>Step and cover flashings</li>
<li>Lead valleys and soakers</li>
<li>Bay window and porch roofs</li>
</ul>"#,
    },
    Entry {
        slug: "cement-work",
        title: "Cement Work and Roof Pointing",
        subtitle: "Ridge re-bedding, verge pointing and chimney repairs with the right mortar.",
        image: "/services/cement-work.jpg",
        content: r#"<h2>Mortar does not last forever</h2>
<p>Cracked bedding lets ridge tiles loosen and water reach the timbers. We rake out failed mortar and re-bed or re-point using a mix suited to the roof.</p>"#,
    },
];

pub static AREAS: &[Entry] = &[
    Entry {
        slug: "southampton",
        title: "Roofer in Southampton",
        subtitle: "Roof repairs and replacements for homes across Southampton, from Shirley to Bitterne.",
        image: "/areas/southampton.jpg",
        content: r#"<h2>Local roofing in Southampton</h2>
<p>Southampton's mix of Victorian terraces, post-war semis and modern estates means every roof is different. We survey first so the quote fits your house.</p>
<p>Coastal weather is hard on ridge mortar and flat roofs. Most of our call-outs here are for storm damage and leaking extensions.</p>"#,
    },
    Entry {
        slug: "winchester",
        title: "Roofer in Winchester",
        subtitle: "Careful work on period and modern homes in and around Winchester.",
        image: "/areas/winchester.jpg",
        content: r#"<h2>Roofing in Winchester</h2>
<p>Many Winchester homes have clay tiles, slate and lead detailing that need a sympathetic approach. We match materials and respect conservation requirements.</p>"#,
    },
    Entry {
        slug: "new-forest",
        title: "Roofer in New Forest",
        subtitle: "Roofing for cottages and family homes throughout the New Forest villages.",
        image: "/areas/new-forest.jpg",
        content: r#"<h2>Roofing in the New Forest</h2>
<p>Overhanging trees mean blocked valleys, moss and damp. We clear, repair and protect roofs across Lyndhurst, Brockenhurst, Ringwood and Lymington.</p>"#,
    },
    Entry {
        slug: "chandlers-ford",
        title: "Roofer in Chandler's Ford",
        subtitle: "Honest roofing advice for homeowners in Chandler's Ford.",
        image: "/areas/chandlers-ford.jpg",
        content: r#"<h2>Roofing in Chandler's Ford</h2>
<p>Concrete tiles from the 1970s and 80s are now reaching the point where ridge bedding and felt start to fail. We repair where we can and replace where we must.</p>"#,
    },
    Entry {
        slug: "eastleigh",
        title: "Roofer in Eastleigh",
        subtitle: "Fast, tidy roof repairs and flat roof replacements in Eastleigh.",
        image: "/areas/eastleigh.jpg",
        content: r#"<h2>Roofing in Eastleigh</h2>
<p>From railway-era terraces to new builds, we handle leaks, slipped tiles and flat roof replacements across Eastleigh and Bishopstoke.</p>"#,
    },
];

pub static GUIDES: &[Entry] = &[
    Entry {
        slug: "signs-your-roof-needs-repair",
        title: "7 Signs Your Roof Needs Repair",
        subtitle: "What to look for inside and outside before a small problem becomes a big one.",
        image: "/guides/signs-your-roof-needs-repair.jpg",
        content: r#"<h2>Inside the house</h2>
<ul>
<li>Damp patches on ceilings or upper walls</li>
<li>Drips or wet insulation in the loft after rain</li>
<li>Daylight visible through the roof boards</li>
</ul>
<h2>Outside</h2>
<ul>
<li>Slipped, cracked or missing tiles</li>
<li>Cracked mortar along the ridge</li>
<li>Lifted flashing around the chimney</li>
<li>Flat roofs that hold standing water</li>
</ul>"#,
    },
    Entry {
        slug: "repair-or-replace",
        title: "Repair or Replace? How to Decide",
        subtitle: "An honest look at when a repair will do and when replacement saves money.",
        image: "/guides/repair-or-replace.jpg",
        content: r#"<h2>Start with the condition, not the age</h2>
<p>A forty-year-old roof can have plenty of life left, and a fifteen-year-old one can be failing. A survey tells you which.</p>
<h2>When repair makes sense</h2>
<p>Isolated damage, sound battens and tiles that are not porous.</p>
<h2>When replacement makes sense</h2>
<p>Widespread leaks, perished felt, rotten battens or repeated repairs in different places.</p>"#,
    },
    Entry {
        slug: "flat-roof-options",
        title: "Flat Roof Options Explained",
        subtitle: "EPDM, felt and GRP compared for extensions and garages.",
        image: "/guides/flat-roof-options.jpg",
        content: r#"<h2>EPDM rubber</h2>
<p>A single sheet with no seams on most domestic roofs. Long life and low maintenance.</p>
<h2>Torch-on felt</h2>
<p>Layered and proven. Good value and easy to repair.</p>
<h2>GRP fibreglass</h2>
<p>Hard-wearing and neat, but needs dry weather and careful installation.</p>"#,
    },
    Entry {
        slug: "why-leaks-are-hard-to-find",
        title: "Why Roof Leaks Are Hard to Find",
        subtitle: "Water travels. Here is why the stain on your ceiling is rarely under the hole.",
        image: "/guides/why-leaks-are-hard-to-find.jpg",
        content: r#"<h2>Water follows the timber</h2>
<p>Rain that gets past a tile runs along the felt and rafters before it drips. The stain can be a metre or more from the entry point.</p>
<p>That is why we inspect from the loft and the roof before quoting.</p>"#,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqCategory {
    pub title: &'static str,
    pub faqs: &'static [Faq],
}

pub static FAQ_CATEGORIES: &[FaqCategory] = &[
    FaqCategory {
        title: "Quotes & Surveys",
        faqs: &[
            Faq {
                question: "Do you offer quotes without seeing the roof?",
                answer: "No. We always carry out a site survey first. Roofs can look fine from the ground but have hidden issues. A proper check helps us give you honest advice and an accurate quote.",
            },
            Faq {
                question: "Is the site survey really free?",
                answer: "Yes, completely free with no obligation. We'll inspect your roof, explain what we find, and give you a clear quote. There's no pressure to proceed.",
            },
            Faq {
                question: "What happens during the site survey?",
                answer: "We inspect the roof and focus on the places where problems often start: missing or damaged tiles, roof edges and joins, chimney flashing and signs of water getting in. We then explain what we found in simple terms.",
            },
        ],
    },
    FaqCategory {
        title: "Repairs & Work",
        faqs: &[
            Faq {
                question: "Is a leak always easy to find?",
                answer: "Not always. Water can travel along rafters before dripping down, so the actual leak may be far from the stain. That's why we inspect properly rather than guessing.",
            },
            Faq {
                question: "How long does a typical repair take?",
                answer: "Most repairs are completed in a day or less. Larger jobs may take 2-3 days. We'll give you a realistic timeline after the survey.",
            },
        ],
    },
    FaqCategory {
        title: "Insurance & Coverage",
        faqs: &[
            Faq {
                question: "Are you fully insured?",
                answer: "Yes. We carry public liability insurance to protect you and your property, and we're happy to provide documentation.",
            },
            Faq {
                question: "Do you offer guarantees?",
                answer: "Yes. All our work comes with a workmanship guarantee. Materials also carry manufacturer warranties where applicable.",
            },
        ],
    },
];

pub static HOME_FAQS: &[Faq] = &[
    Faq {
        question: "Do you give quotes without seeing the roof?",
        answer: "No, and that's a good thing. We always survey in person before quoting, so you get honest advice and accurate pricing.",
    },
    Faq {
        question: "What areas do you cover?",
        answer: "Southampton, Winchester, the New Forest, Chandler's Ford, Eastleigh and nearby towns. Not sure if we cover you? Just ask.",
    },
    Faq {
        question: "Do you work on both pitched and flat roofs?",
        answer: "Yes, we handle all domestic roof types: tiled and slate pitched roofs, felt and EPDM flat roofs, or a combination.",
    },
];

/// A category with only the FAQs matching `term`. Categories left empty are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqMatches {
    pub title: &'static str,
    pub faqs: Vec<&'static Faq>,
}

pub fn search_faqs(term: &str) -> Vec<FaqMatches> {
    let needle = term.trim().to_lowercase();
    FAQ_CATEGORIES
        .iter()
        .map(|category| FaqMatches {
            title: category.title,
            faqs: category
                .faqs
                .iter()
                .filter(|faq| {
                    needle.is_empty()
                        || faq.question.to_lowercase().contains(&needle)
                        || faq.answer.to_lowercase().contains(&needle)
                })
                .collect(),
        })
        .filter(|category| !category.faqs.is_empty())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Review {
    pub author: &'static str,
    pub location: &'static str,
    pub text: &'static str,
    pub rating: u8,
}

pub static REVIEWS: &[Review] = &[
    Review {
        author: "Sarah M.",
        location: "Southampton",
        text: "Found the leak two other roofers missed. Clear quote, tidy work and no upselling.",
        rating: 5,
    },
    Review {
        author: "David R.",
        location: "Winchester",
        text: "Replaced the lead flashing on our chimney. Turned up when they said and explained everything.",
        rating: 5,
    },
    Review {
        author: "Helen T.",
        location: "Chandler's Ford",
        text: "New EPDM roof on the extension. Not a drop since, and they left the garden spotless.",
        rating: 5,
    },
    Review {
        author: "Mark P.",
        location: "New Forest",
        text: "Told us a repair would do when we were expecting to need a new roof. Honest people.",
        rating: 5,
    },
];

/// `(value, label)` pairs for the quote form's choice steps.
pub static SERVICE_TYPES: &[(&str, &str)] = &[
    ("roof-repairs", "Roof Repairs"),
    ("pitched-roof-replacement", "Pitched Roof Replacement"),
    ("flat-roof-replacement", "Flat Roof Replacement"),
    ("leadwork", "Leadwork and Lead Flashing"),
    ("cement-work", "Cement Work and Roof Pointing"),
    ("not-sure", "Not Sure - Need Advice"),
];

pub static PROPERTY_TYPES: &[(&str, &str)] = &[
    ("detached", "Detached"),
    ("semi-detached", "Semi-detached"),
    ("terraced", "Terraced"),
    ("bungalow", "Bungalow"),
    ("flat", "Flat / Maisonette"),
];

pub static ROOF_TYPES: &[(&str, &str)] = &[
    ("pitched-tiled", "Pitched - Tiled"),
    ("pitched-slate", "Pitched - Slate"),
    ("flat", "Flat"),
    ("mixed", "Mixed"),
    ("unknown", "Not sure"),
];

/// A warning sign homeowners notice, pointing at the page that explains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Problem {
    pub title: &'static str,
    pub description: &'static str,
    pub urgency: &'static str,
    pub link: (ContentKind, &'static str),
}

pub static COMMON_PROBLEMS: &[Problem] = &[
    Problem {
        title: "Water Stains on Ceiling",
        description: "Brown marks or damp patches after rain usually mean a roof leak. Water can travel a long way before it shows, so the source is often somewhere else.",
        urgency: "Act quickly to prevent structural damage",
        link: (ContentKind::Guides, "why-leaks-are-hard-to-find"),
    },
    Problem {
        title: "Slipped or Missing Tiles",
        description: "High winds shift tiles and leave the felt underneath open to sun and rain. Left alone, a small gap turns into a bigger repair.",
        urgency: "Repair before wet weather arrives",
        link: (ContentKind::Services, "roof-repairs"),
    },
    Problem {
        title: "Chimney Leaks",
        description: "Chimneys are the most common source of leaks. Flashing cracks or pulls away and the mortar wears out over time.",
        urgency: "Common cause of damp patches indoors",
        link: (ContentKind::Services, "leadwork"),
    },
    Problem {
        title: "Flat Roof Bubbling",
        description: "Bubbles on a flat roof mean trapped moisture. Sun heats it and the layers come apart. This often needs replacing, not patching.",
        urgency: "May indicate replacement needed",
        link: (ContentKind::Guides, "flat-roof-options"),
    },
    Problem {
        title: "Cracked Lead Flashing",
        description: "Lead flashing seals the joints and edges of a roof. Once it cracks or lifts, water tracks inside and causes damp and staining.",
        urgency: "Waterproofing failure risk",
        link: (ContentKind::Services, "leadwork"),
    },
    Problem {
        title: "Loose Ridge Cement",
        description: "Cracked cement along the ridge lets water in and loosens the ridge tiles. In high winds those tiles can come down.",
        urgency: "Safety and water damage risk",
        link: (ContentKind::Services, "cement-work"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const KINDS: [ContentKind; 3] = [ContentKind::Services, ContentKind::Areas, ContentKind::Guides];

    #[test]
    fn every_slug_resolves_to_its_own_entry() {
        for kind in KINDS {
            for entry in kind.entries() {
                match kind.lookup(entry.slug) {
                    Lookup::Found(found) => {
                        assert_eq!(found.title, entry.title);
                        assert_eq!(found.subtitle, entry.subtitle);
                    }
                    Lookup::NotFound { .. } => panic!("{} did not resolve", entry.slug),
                }
            }
        }
    }

    #[test]
    fn slugs_are_unique_and_url_safe() {
        for kind in KINDS {
            let mut seen = HashSet::new();
            for entry in kind.entries() {
                assert!(seen.insert(entry.slug), "duplicate slug {}", entry.slug);
                assert!(entry
                    .slug
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            }
        }
    }

    #[test]
    fn unknown_slug_points_back_to_hub() {
        assert_eq!(
            ContentKind::Areas.lookup("atlantis"),
            Lookup::NotFound { kind: ContentKind::Areas }
        );
        assert_eq!(ContentKind::Areas.hub_path(), "/areas");
        assert_eq!(ContentKind::Guides.not_found_title(), "Article not found");
        assert!(ContentKind::Services.find("").is_none());
    }

    #[test]
    fn repeated_reads_keep_order() {
        let first: Vec<_> = ContentKind::Areas.entries().iter().map(|e| e.slug).collect();
        let second: Vec<_> = ContentKind::Areas.entries().iter().map(|e| e.slug).collect();
        assert_eq!(first, second);
        assert_eq!(first[0], "southampton");
    }

    #[test]
    fn others_excludes_current_slug() {
        let others: Vec<_> = ContentKind::Services.others("leadwork").map(|e| e.slug).collect();
        assert_eq!(others.len(), SERVICES.len() - 1);
        assert!(!others.contains(&"leadwork"));
    }

    #[test]
    fn area_name_strips_prefix() {
        let area = ContentKind::Areas.find("chandlers-ford").unwrap();
        assert_eq!(area.area_name(), "Chandler's Ford");
        let service = ContentKind::Services.find("leadwork").unwrap();
        assert_eq!(service.area_name(), service.title);
    }

    #[test]
    fn detail_path_joins_hub_and_slug() {
        assert_eq!(ContentKind::Guides.detail_path("repair-or-replace"), "/guides/repair-or-replace");
    }

    #[test]
    fn faq_search_is_case_insensitive_and_drops_empty_categories() {
        let all = search_faqs("");
        assert_eq!(all.len(), FAQ_CATEGORIES.len());

        let hits = search_faqs("  GUARANTEE ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Insurance & Coverage");
        assert_eq!(hits[0].faqs.len(), 1);

        assert!(search_faqs("zzzz").is_empty());
    }

    #[test]
    fn every_problem_links_to_a_real_page() {
        assert_eq!(COMMON_PROBLEMS.len(), 6);
        for problem in COMMON_PROBLEMS {
            let (kind, slug) = problem.link;
            assert!(
                matches!(kind.lookup(slug), Lookup::Found(_)),
                "{} links to missing {}",
                problem.title,
                slug
            );
        }
    }
}
