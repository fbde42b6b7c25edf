//! Marketing copy for the landing page.

pub const BRAND: &str = "JD Solutions";
pub const BRAND_SHORT: &str = "JDS";

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "Portfolio", href: "#" },
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Contact", href: "#" },
];

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Web Design & Development",
        description: "Custom websites built to convert visitors into customers",
        icon: "🎨",
    },
    Service {
        title: "Branding & Strategy",
        description: "Comprehensive brand identity and digital strategy",
        icon: "⚡",
    },
    Service {
        title: "Digital Marketing",
        description: "Results-driven marketing campaigns that grow your business",
        icon: "📈",
    },
    Service {
        title: "E-commerce Solutions",
        description: "Powerful online stores that drive sales and revenue",
        icon: "🛒",
    },
];

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { number: "500+", label: "Projects Completed" },
    Stat { number: "200+", label: "Happy Clients" },
    Stat { number: "10+", label: "Years Experience" },
    Stat { number: "50+", label: "Team Members" },
];

pub struct Testimonial {
    pub name: &'static str,
    pub company: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        company: "TechStart Inc.",
        quote: "JDS transformed our online presence completely. Our conversion rates increased by 300%.",
        rating: 5,
    },
    Testimonial {
        name: "Michael Chen",
        company: "E-commerce Plus",
        quote: "The team's expertise in web design and digital marketing is unmatched. Highly recommended!",
        rating: 5,
    },
    Testimonial {
        name: "Emily Rodriguez",
        company: "Creative Agency",
        quote: "Professional, creative, and results-driven. JDS exceeded all our expectations.",
        rating: 5,
    },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Founded in 2019, JDS has grown from a small creative studio to a full-service digital agency trusted by brands worldwide. We combine strategic thinking with creative excellence to deliver digital experiences that drive real business results.",
    "Our team of award-winning designers, developers, and digital strategists work collaboratively to bring your vision to life. We don't just build websites – we craft digital ecosystems that engage, convert, and grow with your business.",
    "From Fortune 500 companies to innovative startups, we've helped hundreds of brands establish their digital presence and achieve measurable growth through strategic design and development.",
];

pub struct CoreValue {
    pub title: &'static str,
    pub description: &'static str,
}

pub const CORE_VALUES: &[CoreValue] = &[
    CoreValue {
        title: "Innovation First",
        description: "We stay ahead of digital trends to deliver cutting-edge solutions.",
    },
    CoreValue {
        title: "Results Driven",
        description: "Every decision we make is focused on delivering measurable business results.",
    },
    CoreValue {
        title: "Client Partnership",
        description: "We build long-term relationships based on trust and transparency.",
    },
    CoreValue {
        title: "Creative Excellence",
        description: "We combine strategic thinking with exceptional creative execution.",
    },
];

pub struct Award {
    pub icon: &'static str,
    pub title: &'static str,
    pub year: u16,
}

pub const AWARDS: &[Award] = &[
    Award { icon: "🏆", title: "Best Digital Agency", year: 2023 },
    Award { icon: "⭐", title: "Top Web Designer", year: 2023 },
    Award { icon: "🎯", title: "Innovation Award", year: 2023 },
    Award { icon: "💎", title: "Excellence in UX", year: 2022 },
];

pub struct TeamCount {
    pub count: &'static str,
    pub role: &'static str,
}

pub const TEAM: &[TeamCount] = &[
    TeamCount { count: "15+", role: "Designers" },
    TeamCount { count: "20+", role: "Developers" },
    TeamCount { count: "8+", role: "Strategists" },
    TeamCount { count: "7+", role: "Marketing Experts" },
];

pub struct SocialLink {
    pub label: &'static str,
    pub href: Option<&'static str>,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "f", href: Some("https://facebook.com/jumerrydigital") },
    SocialLink { label: "Inst", href: Some("https://www.instagram.com/jumerry_digital") },
    SocialLink { label: "in", href: None },
];

pub const FOOTER_SERVICES: &[&str] = &["Web Design", "Development", "Digital Marketing", "Branding"];
pub const FOOTER_COMPANY: &[&str] = &["About Us", "Portfolio", "Careers", "Contact"];
pub const CONTACT_INFO: &[&str] = &["Lagos, Nigeria", "Ikeja", "Jumerrydigitalsolutions@gmail.com"];
