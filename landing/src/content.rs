//! Static copy for the landing page.
//!
//! Everything here is declared once and never mutated; sections only read it.

pub struct CodeSample {
    pub label: &'static str,
    pub lang: &'static str,
    pub code: &'static str,
}

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub bg: &'static str,
    pub color: &'static str,
}

pub struct UseCase {
    pub icon: &'static str,
    pub kind: &'static str,
    pub scenario: &'static str,
    pub benefit: &'static str,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct ComparisonRow {
    pub feature: &'static str,
    pub diy: &'static str,
    pub paylloom: &'static str,
}

pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct DashStat {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
    pub color: &'static str,
}

pub struct DashTransaction {
    pub name: &'static str,
    pub amount: &'static str,
    pub status: &'static str,
    pub fee: &'static str,
}

impl DashTransaction {
    /// Avatar letter.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }

    pub fn status_class(&self) -> String {
        format!("pl2-dash-tx-status pl2-status-{}", self.status)
    }
}

pub struct Problem {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub color: &'static str,
}

/// Which mock visual accompanies a "how it works" step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepVisual {
    MpesaTopUp,
    FeeSplit,
    Payout,
}

pub struct HowStep {
    pub num: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub note: &'static str,
    pub visual: StepVisual,
}

pub struct PricingTier {
    pub badge: &'static str,
    pub name: &'static str,
    pub percent: &'static str,
    pub fixed: &'static str,
    pub per: &'static str,
    pub inclusions: &'static [&'static str],
    pub note: &'static str,
}

pub struct CalculatorRow {
    pub gmv: &'static str,
    pub fee: &'static str,
}

pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

/// `Route` targets go through the router; `Href` targets are plain anchors.
pub enum FooterLink {
    Route(&'static str, &'static str),
    Href(&'static str, &'static str),
}

pub const CODE_SAMPLES: &[CodeSample] = &[
    CodeSample {
        label: "Create Top-Up",
        lang: "javascript",
        code: r#"// Initiate buyer wallet top-up
const topup = await paylloom.wallets.topup({
  user_id: "buyer_123",
  amount: 5000,        // KES
  method: "mpesa",
  phone: "+254712345678"
});

// Response: STK push sent to buyer's phone
// webhook fires on: topup.completed"#,
    },
    CodeSample {
        label: "Process Purchase",
        lang: "javascript",
        code: r#"// Split payment between platform & seller
const purchase = await paylloom.transactions.create({
  buyer_id: "buyer_123",
  seller_id: "seller_456",
  product_id: "prod_789",
  amount: 1000,           // KES
  platform_fee_percent: 10
});

// Paylloom handles automatically:
// ✓ Buyer balance check
// ✓ Atomic debit from buyer wallet
// ✓ Platform fee: 100 KES
// ✓ Seller credit: 900 KES
// ✓ Full audit trail + webhooks"#,
    },
    CodeSample {
        label: "Request Payout",
        lang: "javascript",
        code: r#"// Seller requests withdrawal
const payout = await paylloom.withdrawals.create({
  seller_id: "seller_456",
  amount: 900,            // KES
  method: "mpesa",
  account: "+254712345678"
});

// Status: processing → completed
// Money hits M-Pesa in < 60 seconds
// webhook fires on: withdrawal.completed"#,
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🏦",
        title: "Multi-Currency Wallets",
        desc: "Buyers and sellers each get isolated wallet balances. Track every deposit, purchase, and withdrawal with full transaction history.",
        bg: "#ebf0ff",
        color: "#4361ee",
    },
    Feature {
        icon: "⚙️",
        title: "Flexible Fee Structures",
        desc: "Set platform fees as percentage or fixed amount. Different rates for different product categories or seller tiers.",
        bg: "#f0fff8",
        color: "#049a74",
    },
    Feature {
        icon: "🚀",
        title: "Automated Disbursements",
        desc: "Configure auto-payouts below a threshold or require admin approval. Batch-process hundreds of withdrawals at once.",
        bg: "#fff3eb",
        color: "#e05c10",
    },
    Feature {
        icon: "📊",
        title: "Real-Time Dashboards",
        desc: "See GMV, platform revenue, pending payouts, and transaction volumes in live analytics with no delay.",
        bg: "#f5f0ff",
        color: "#7b2d8b",
    },
    Feature {
        icon: "🔔",
        title: "Webhook Events",
        desc: "Get notified instantly for every payment event: topup.completed, purchase.succeeded, withdrawal.approved, disbursement.failed.",
        bg: "#e8f8ff",
        color: "#006fa8",
    },
    Feature {
        icon: "🛡️",
        title: "Fraud Protection",
        desc: "Built-in rate limiting, duplicate transaction prevention, and suspicious activity alerts with zero extra setup.",
        bg: "#fff5e6",
        color: "#b45309",
    },
    Feature {
        icon: "📋",
        title: "Audit Trails",
        desc: "Every financial action is logged with timestamps, user IDs, and before/after balances for complete accountability.",
        bg: "#f0f2ff",
        color: "#4361ee",
    },
    Feature {
        icon: "🧑‍💻",
        title: "Developer-Friendly API",
        desc: "RESTful endpoints, comprehensive docs, SDKs for Node.js/Python, Postman collections, and a full sandbox environment.",
        bg: "#f0fff8",
        color: "#049a74",
    },
    Feature {
        icon: "📱",
        title: "M-Pesa Native",
        desc: "Not an afterthought. M-Pesa is a first-class payment method with optimized STK push flows for East African markets.",
        bg: "#fff3eb",
        color: "#e05c10",
    },
];

pub const USE_CASES: &[UseCase] = &[
    UseCase {
        icon: "🛒",
        kind: "E-Commerce Marketplaces",
        scenario: "Multi-vendor stores where sellers list products and need instant payouts after each sale, with automatic fee collection.",
        benefit: "Launch your Jumia-style platform in days",
    },
    UseCase {
        icon: "💼",
        kind: "Service Marketplaces",
        scenario: "Freelancer platforms connecting professionals with clients. Handle escrow and release payments on job completion.",
        benefit: "Built-in escrow for trusted transactions",
    },
    UseCase {
        icon: "🏠",
        kind: "Rental & Booking Platforms",
        scenario: "Airbnb-style marketplaces where hosts receive payments after reservations, minus your platform commission.",
        benefit: "Automated host payouts after check-in",
    },
    UseCase {
        icon: "⚡",
        kind: "Gig Economy Platforms",
        scenario: "Delivery, errands, or task-based platforms that need to pay workers quickly and accurately after job completion.",
        benefit: "Instant worker payouts via M-Pesa",
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How long does integration take?",
        answer: "Most developers complete integration in under 30 minutes. We provide SDKs, detailed documentation, sample code, and a Postman collection.",
    },
    Faq {
        question: "What payment methods do you support?",
        answer: "M-Pesa, Visa/Mastercard, bank transfers, and Airtel Money via our IntaSend integration, with more providers launching quarterly.",
    },
    Faq {
        question: "How secure is Paylloom?",
        answer: "We use bank-grade encryption, webhook signature validation, and never store payment credentials. Built on IntaSend's PCI-DSS compliant infrastructure.",
    },
    Faq {
        question: "Can I customize the fee split?",
        answer: "Yes, you control the platform fee as a percentage or fixed amount. Set different rates for different product categories or seller tiers.",
    },
    Faq {
        question: "What happens if a disbursement fails?",
        answer: "You're notified immediately via webhook. The withdrawal returns to pending status and you can retry or flag it for manual review.",
    },
    Faq {
        question: "Do you support refunds?",
        answer: "Yes, refunds are supported via API and automatically reverse all fee calculations, crediting the buyer wallet instantly.",
    },
    Faq {
        question: "Is there a minimum transaction amount?",
        answer: "No minimum. Process transactions from KES 10 to KES 1,000,000+ on the same infrastructure.",
    },
];

pub const COMPARISON_ROWS: &[ComparisonRow] = &[
    ComparisonRow { feature: "Time to launch", diy: "2–3 months", paylloom: "5 minutes" },
    ComparisonRow { feature: "Upfront cost", diy: "$15K – $50K", paylloom: "$0" },
    ComparisonRow { feature: "Engineers required", diy: "2–3 full-time", paylloom: "0" },
    ComparisonRow { feature: "M-Pesa integration", diy: "Complex, fragile", paylloom: "Built-in" },
    ComparisonRow { feature: "Security compliance", diy: "Your responsibility", paylloom: "Handled" },
    ComparisonRow { feature: "Ongoing maintenance", diy: "High", paylloom: "None" },
    ComparisonRow { feature: "Payout automation", diy: "Build from scratch", paylloom: "Out of the box" },
    ComparisonRow { feature: "Reconciliation", diy: "Manual systems", paylloom: "Automatic" },
];

pub const METRICS: &[Metric] = &[
    Metric { value: "$2M+", label: "Disbursed to Sellers" },
    Metric { value: "500K+", label: "Transactions Processed" },
    Metric { value: "99.9%", label: "Platform Uptime" },
    Metric { value: "< 2s", label: "Avg Response Time" },
];

pub const DASH_STATS: &[DashStat] = &[
    DashStat { label: "GMV This Month", value: "KES 2.4M", delta: "+18%", color: "#06d6a0" },
    DashStat { label: "Platform Fees", value: "KES 240K", delta: "+18%", color: "#4361ee" },
    DashStat { label: "Pending Payouts", value: "KES 86K", delta: "12 sellers", color: "#f59e0b" },
];

pub const DASH_TRANSACTIONS: &[DashTransaction] = &[
    DashTransaction { name: "Amina K.", amount: "+KES 4,500", status: "completed", fee: "450" },
    DashTransaction { name: "Brian O.", amount: "+KES 12,000", status: "completed", fee: "1,200" },
    DashTransaction { name: "Ciku M.", amount: "+KES 3,200", status: "processing", fee: "320" },
];

pub const PROBLEMS: &[Problem] = &[
    Problem {
        icon: "🧱",
        title: "Complexity That Kills Velocity",
        desc: "Building payment splitting requires weeks of development: transaction locking, reconciliation, webhook handling, and ongoing maintenance. Your engineers should be building your product, not payment plumbing.",
        color: "#dc2626",
    },
    Problem {
        icon: "⏳",
        title: "Delayed Seller Payouts",
        desc: "Your sellers are waiting 5–7 days for manual payouts while competitors offer instant settlements. Unhappy sellers leave your marketplace and take their inventory with them.",
        color: "#d97706",
    },
    Problem {
        icon: "💰",
        title: "Expensive to Build & Maintain",
        desc: "Hiring payment engineers, maintaining infrastructure, and handling compliance costs $15K–$50K upfront plus ongoing salaries. That's capital you could spend on growth.",
        color: "#7c3aed",
    },
    Problem {
        icon: "🐛",
        title: "Manual Errors & Reconciliation Hell",
        desc: "Manual payment processing leads to split errors, double payments, and reconciliation nightmares. Every mistake erodes trust with your sellers and buyers.",
        color: "#0891b2",
    },
];

pub const HOW_STEPS: &[HowStep] = &[
    HowStep {
        num: "01",
        title: "Buyer Tops Up Wallet",
        desc: "Your buyers fund their wallets using M-Pesa STK push, Visa/Mastercard, or bank transfer. Paylloom confirms via webhook in seconds.",
        note: "Collections API · Automatic webhook confirmation",
        visual: StepVisual::MpesaTopUp,
    },
    HowStep {
        num: "02",
        title: "Automatic Split on Purchase",
        desc: "When a buyer purchases, Paylloom instantly splits the payment: platform fee deducted, seller earnings credited. No manual calculations.",
        note: "ACID transactions · Row-level locking",
        visual: StepVisual::FeeSplit,
    },
    HowStep {
        num: "03",
        title: "Instant Seller Payout",
        desc: "Sellers request withdrawals anytime. Money hits their M-Pesa or bank account in minutes, not days. Full status tracking via webhooks.",
        note: "Automated disbursements · Real-time status",
        visual: StepVisual::Payout,
    },
];

pub const PRICING: PricingTier = PricingTier {
    badge: "Most Popular",
    name: "Pay-as-you-Grow",
    percent: "2.5%",
    fixed: "+ KES 10",
    per: "per transaction processed",
    inclusions: &[
        "No monthly fees or setup costs",
        "Unlimited sandbox transactions (free)",
        "M-Pesa, cards & bank transfers",
        "Automated seller disbursements",
        "Real-time webhooks & dashboard",
        "Full API access + SDK",
        "Email + chat support",
    ],
    note: "No credit card required. Free sandbox included.",
};

pub const CALCULATOR_ROWS: &[CalculatorRow] = &[
    CalculatorRow { gmv: "KES 100,000 / month", fee: "KES 2,500 in Paylloom fees" },
    CalculatorRow { gmv: "KES 500,000 / month", fee: "KES 12,500 in Paylloom fees" },
    CalculatorRow { gmv: "KES 1,000,000 / month", fee: "KES 25,000 in Paylloom fees" },
];

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Product",
        links: &[
            FooterLink::Href("Features", "#features"),
            FooterLink::Href("Pricing", "#pricing"),
            FooterLink::Href("Documentation", "#"),
            FooterLink::Href("API Reference", "#"),
            FooterLink::Href("Status Page", "#"),
        ],
    },
    FooterColumn {
        title: "Company",
        links: &[
            FooterLink::Href("About", "#"),
            FooterLink::Href("Blog", "#"),
            FooterLink::Href("Careers", "#"),
            FooterLink::Href("Contact", "mailto:hello@paylloom.com"),
        ],
    },
    FooterColumn {
        title: "Resources",
        links: &[
            FooterLink::Href("Guides", "#"),
            FooterLink::Href("Case Studies", "#"),
            FooterLink::Href("Developer Docs", "#"),
            FooterLink::Href("Support", "#"),
        ],
    },
    FooterColumn {
        title: "Legal",
        links: &[
            FooterLink::Route("Privacy Policy", "/legal"),
            FooterLink::Route("Terms of Service", "/legal"),
            FooterLink::Href("Security", "#"),
        ],
    },
];

/// In-page anchors shared by the desktop and mobile navigation.
pub const NAV_ANCHORS: &[(&str, &str)] = &[
    ("How it works", "#how"),
    ("Features", "#features"),
    ("Pricing", "#pricing"),
    ("FAQ", "#faq"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn code_tabs_in_display_order() {
        let labels: Vec<_> = CODE_SAMPLES.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Create Top-Up", "Process Purchase", "Request Payout"]);
    }

    #[test]
    fn code_samples_are_distinct() {
        for (i, a) in CODE_SAMPLES.iter().enumerate() {
            for b in &CODE_SAMPLES[i + 1..] {
                assert_ne!(a.code, b.code);
            }
        }
    }

    #[test]
    fn section_sizes() {
        assert_eq!(FEATURES.len(), 9);
        assert_eq!(USE_CASES.len(), 4);
        assert_eq!(FAQS.len(), 7);
        assert_eq!(COMPARISON_ROWS.len(), 8);
        assert_eq!(METRICS.len(), 4);
        assert_eq!(PROBLEMS.len(), 4);
        assert_eq!(PRICING.inclusions.len(), 7);
        assert_eq!(CALCULATOR_ROWS.len(), 3);
    }

    #[test]
    fn how_steps_cover_each_visual_once() {
        let visuals: Vec<_> = HOW_STEPS.iter().map(|s| s.visual).collect();
        assert_eq!(
            visuals,
            vec![StepVisual::MpesaTopUp, StepVisual::FeeSplit, StepVisual::Payout]
        );
    }

    #[test]
    fn transaction_helpers() {
        let tx = &DASH_TRANSACTIONS[2];
        assert_eq!(tx.initial(), "C");
        assert_eq!(tx.status_class(), "pl2-dash-tx-status pl2-status-processing");
    }

    #[test]
    fn nav_anchors_target_page_sections() {
        let targets: Vec<_> = NAV_ANCHORS.iter().map(|(_, href)| *href).collect();
        assert_eq!(targets, vec!["#how", "#features", "#pricing", "#faq"]);
    }

    #[test]
    fn legal_links_go_through_router() {
        let legal = FOOTER_COLUMNS.iter().find(|c| c.title == "Legal").unwrap();
        let routed = legal
            .links
            .iter()
            .filter(|l| matches!(l, FooterLink::Route(_, "/legal")))
            .count();
        assert_eq!(routed, 2);
    }
}
