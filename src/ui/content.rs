//! Static copy shown around the estimator.

pub const TAGLINE_LOCAL: &str = "Across town, priced by the mile.";
pub const TAGLINE_LONG_DISTANCE: &str = "Across the country, priced by the load.";

pub struct Tip {
    pub title: &'static str,
    pub body: &'static str,
}

pub const TIPS: &[Tip] = &[
    Tip {
        title: "Book early",
        body: "Movers fill up fast at the end of the month and during summer. Reserve four to six weeks ahead for better rates.",
    },
    Tip {
        title: "Declutter first",
        body: "Every box you sell, donate, or recycle is one less box to pack, carry, and pay for.",
    },
    Tip {
        title: "Get several quotes",
        body: "Ask at least three licensed movers for an in-home or video survey and compare what each quote includes.",
    },
    Tip {
        title: "Check insurance",
        body: "Basic carrier liability is usually limited by weight. Ask about full-value protection for valuable items.",
    },
    Tip {
        title: "Pack an essentials box",
        body: "Keep medication, documents, chargers, and a change of clothes with you rather than on the truck.",
    },
    Tip {
        title: "Measure doorways",
        body: "Confirm large furniture fits through doors, stairwells, and elevators at the new place before moving day.",
    },
];

pub const DISCLAIMER: &str = "Estimates are for planning purposes only and are not a quote or an offer of service. \
Actual prices depend on the mover, the date, access at both addresses, the weight and volume of your belongings, \
and any additional services you request.";

pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const FOOTER_LINKS: &[FooterLink] = &[
    FooterLink {
        label: "FMCSA: Protect Your Move",
        href: "https://www.fmcsa.dot.gov/protect-your-move",
    },
    FooterLink {
        label: "Your Rights and Responsibilities",
        href: "https://www.fmcsa.dot.gov/protect-your-move/your-rights-and-responsibilities-when-you-move",
    },
    FooterLink {
        label: "Moving checklist",
        href: "https://www.usa.gov/moving",
    },
];
