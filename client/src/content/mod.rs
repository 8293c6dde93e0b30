//! Static site copy and link targets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every string the landing page shows lives here so components stay pure
//! layout. Nothing in this module changes at runtime.

pub mod legal;


pub const BRAND: &str = "キコウ！";

/// External contact form. Passed through unmodified as a link target.
pub const FORM_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLScWCMDxMJgcja8wlKa9u2X_pGidkoC9tOb0iOu9fJY14m14jw/viewform?usp=sharing&ouid=105401518336407820619";

pub const CONTACT_EMAIL: &str = "info@hoshikagyoko.com";
pub const COMPANY_NAME: &str = "合同会社YOKARAI (YOKARAI LLC)";
pub const COMPANY_ADDRESS: &str = "長崎県松浦市星鹿町岳崎免2524-2";

/// Company info page. No page exists yet, so the link is a bare anchor.
pub const COMPANY_URL: &str = "#";

pub const COPYRIGHT: &str = "© 2024 キコウ！ All Rights Reserved.";

/// Label used on every outbound contact-form link.
pub const CONTACT_LABEL: &str = "お問い合わせ";
pub const CONSULT_LABEL: &str = "まずは相談する（無料）";

pub const HERO_IMAGE_URL: &str = "https://lh3.googleusercontent.com/aida-public/AB6AXuBLt0zi8z0LM0lLS7Vd7hwFDkRipDKZBxmnvgmDYbtSix5ZoCvNOCtQlHYwnll_d_mmnW28jvr9-aCftFF1hx6zULS04U3034dXq2Le0at50aJ0_AGnGZovwFeWb4X4RQ1LgTTPqabSPwtHUJ5vvEcfsPsdM4Ze3TAogA92IiUwK_tj6u-Ob_DWOgwEaBaNx87QMTlGxbEhQX6J_lwdYrXEA3yPFm2b_7GSGX5n81cILRFUik8adeiCIPCxJb1w7-V_CsGL8Y6qP_cW";
pub const ABOUT_IMAGE_URL: &str = "https://lh3.googleusercontent.com/aida-public/AB6AXuAxSWOF_gmfaiJIg1qELEAVlhF7qFjKHRQ7_iaYih_au-0wtuwnp_EpM7wttewBqOFlSZc-fjQG5yzBD7dDNG3_rRypzd5FNhBc5cqbGuRuq7jlRVusrTLB1qv2vWvb6Y4sAODBOJ6umq-Esv4BzCWK6UMmYV7XwhoWzOklUCPHjBSOTFBpVlOvLYcfk8NrNv8P5Y-e92lEr5YxddViYjdeWaQgMZdtdHCFHYkPMRN9nZYX1vtg0tiuXbTk-wkHtf8fh2yefck63xOE";
pub const PROFILE_IMAGE_URL: &str = "https://lh3.googleusercontent.com/aida-public/AB6AXuAwgzgAIhKyTe6_qgq4SE-RwV9B4ndD-xg8O7SOTrL8PW2ySK6hwimo9MFFXOAAMB6X7yRr6ueG8LhF7KE2s0XbbJq18xrIV3h1xwCtWsw7WkW8X2hMno9dyXY7TVxF4CzZQkF9rcJ3K7aMdxGsB9oVFS7nvXEJEYbfcvjp-ZCxzgcuuci2qkiO5LX7oVN-E3bhqyIWtxYL3Hh72tyKfXrTL9Osahlu-zpJCwBFL34cm0nuDlu-ojxKpHoZ9g21IZnxOXyrU7mRbCVv";

/// Sections that carry a DOM id and can be scrolled to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Services,
    Process,
    Pricing,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [Self::About, Self::Services, Self::Process, Self::Pricing];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Services => "services",
            Self::Process => "process",
            Self::Pricing => "pricing",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == raw)
    }
}

/// One entry in the slide-in menu.
#[derive(Clone, Copy, Debug)]
pub struct NavItem {
    pub label: &'static str,
    pub target: SectionId,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "キコウ！とは？", target: SectionId::About },
    NavItem { label: "サービス内容", target: SectionId::Services },
    NavItem { label: "ご利用の流れ", target: SectionId::Process },
    NavItem { label: "料金プラン", target: SectionId::Pricing },
];

pub const HERO_HEADLINE: [&str; 2] = ["声を重ねて、", "商品は育つ。"];
pub const HERO_TAGLINE: &str = "テストマーケティングの「はじめの一歩」を";
pub const HERO_PRICE: &str = "1商品 25,000円";
pub const HERO_PRICE_NOTE: &str = "（税別）から";

pub const PROBLEMS_HEADING: &str = "こんなお悩みはありませんか？";
pub const PROBLEMS: &[&str] = &[
    "作った商品が本当に売れるか不安",
    "小売店の生の声を聞く機会がない",
    "商品の強みをどう伝えればいいか分からない",
];

pub const PHILOSOPHY_HEADING: &str = "商品は、作って終わりではありません。";
pub const PHILOSOPHY_BODY: &str = "大切なのは、市場に出した後の「声」を拾い上げ、次の一手に繋げること。私たちは、作り手と使い手の間にある「情報のギャップ」を埋めるパートナーです。";

pub const ABOUT_EYEBROW: &str = "About Us";
pub const ABOUT_HEADING: &str = "キコウ！とは？";
pub const ABOUT_IMAGE_ALT: &str = "Consultation session";
pub const ABOUT_CALLOUT: [&str; 2] = ["「聞こう！」から始まる、", "改善のヒント。"];
pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "全国で商品開発経験があり、現在は地域商社業務も行っている経験を活かし、商品の強みを整理。",
    "繋がりがある、小売店や消費者のフィードバックを分析し、改善案を提案するテストマーケティング兼初期販路代行のサービスです。",
];

/// Icon shown on a card. Resolved to SVG paths by `components::icon`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Menu,
    Close,
    Mail,
    AlertCircle,
    MessageSquare,
    BarChart,
    CheckCircle,
    Handshake,
    Brush,
}

/// Heading + body card, optionally with an icon and a price line.
#[derive(Clone, Copy, Debug)]
pub struct Card {
    pub icon: Option<IconKind>,
    pub title: &'static str,
    pub price: Option<&'static str>,
    pub body: &'static str,
}

pub const SERVICES: &[Card] = &[
    Card {
        icon: Some(IconKind::MessageSquare),
        title: "1. 声を集める",
        price: None,
        body: "独自のネットワークを活用し、ターゲット層や専門家からの忌憚のない意見を収集します。",
    },
    Card {
        icon: Some(IconKind::BarChart),
        title: "2. 声を整理する",
        price: None,
        body: "膨大なフィードバックの中から、真に改善が必要なポイントと伸ばすべき魅力を抽出します。",
    },
];

pub const USE_CASES_HEADING: &str = "活用シーン";
pub const USE_CASES: &[Card] = &[
    Card {
        icon: None,
        title: "試作品の反応確認に",
        price: None,
        body: "量産前に市場のニーズと乖離がないか確認し、リスクを最小限に抑えたい時。",
    },
    Card {
        icon: None,
        title: "既存商品のブラッシュアップ",
        price: None,
        body: "売れ行きが伸び悩んでいる商品の、本当の「弱点」を見つけ出したい時。",
    },
];

/// A numbered step in the usage flow.
#[derive(Clone, Copy, Debug)]
pub struct ProcessStep {
    pub title: &'static str,
    pub desc: &'static str,
}

pub const PROCESS_HEADING: &str = "ご利用の流れ";
pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep { title: "無料カウンセリング", desc: "商品の現状やお悩み、目指したい姿をオンラインでじっくり伺います。" },
    ProcessStep {
        title: "ヒアリングシート作成",
        desc: "商品の特徴を整理し、何を聞くべきか最適な質問を設計します。テストマーケティング対象を小売店(2店舗)or消費者(5名程度)からお選びください。",
    },
    ProcessStep { title: "テストマーケティング実施", desc: "パートナー店舗やネットワークを通じて、実際の声を集めます。" },
    ProcessStep { title: "分析・レポート報告", desc: "集まった声を多角的に分析し、具体的な改善提案書を作成します。" },
    ProcessStep { title: "次の一手の決定", desc: "レポートを元に、今後の商品展開や販促の方針を話し合います。" },
];

pub const BENEFITS_HEADING: &str = "得られるメリット";
pub const BENEFITS: &[&str] = &[
    "やるべきことの優先順位が明確になる",
    "客観的なデータで自信を持って営業できる",
    "無駄な投資（量産ミス）を防ぐことができる",
];

/// The single published plan.
#[derive(Clone, Copy, Debug)]
pub struct Plan {
    pub name: &'static str,
    pub scope: &'static str,
    pub amount: &'static str,
    pub unit: &'static str,
    pub notes: [&'static str; 2],
    pub includes: &'static [&'static str],
}

pub const PLAN: Plan = Plan {
    name: "シンプルプラン",
    scope: "1商品・単発テスト",
    amount: "25,000",
    unit: "円〜",
    notes: ["※税別・サンプル提供代別途", "地域や内容により変動あり"],
    includes: &["フォームに基づいたヒアリング", "小売店or消費者へのサンプル提供", "フィードバックレポート"],
};

pub const OPTIONAL_EYEBROW: &str = "Optional Plans";
pub const OPTIONAL_HEADING: &str = "さらに深く、磨き上げるために。";
pub const OPTIONAL_PLANS: &[Card] = &[
    Card {
        icon: Some(IconKind::Handshake),
        title: "商品開発伴走支援",
        price: Some("月額 ¥50,000〜"),
        body: "本サービスで得たインサイトをさらに深掘り。商品が完成形として磨き上げられるまで、開発の全工程を継続的にサポートします。",
    },
    Card {
        icon: Some(IconKind::Brush),
        title: "デザインブラッシュアップ",
        price: Some("一式 ¥100,000〜"),
        body: "関東・関西の第一線で活躍するプロのデザイナーをアサイン。ターゲットや利用シーンに基づき、商品の魅力を最大化するデザインへと磨き上げます。",
    },
];

pub const PROFILE_IMAGE_ALT: &str = "Founder";
pub const PROFILE_TITLE: &str = "代表 長崎県を中心に活躍する商品開発プロデューサー";
pub const PROFILE_BODY: &str = "九州を中心に商品開発や商社事業を行う中で感じた課題をもとにサービスを立ち上げました。まずはお気軽に相談ください。";

pub const CATCHPHRASE: [&str; 2] = ["商品を作るだけでなく、", "商品を育てる仕組みを。"];
pub const CATCHPHRASE_EN: &str = "We help your products grow with authentic voices.";

pub const FINAL_CTA_HEADING: [&str; 2] = ["まずは一度、", "声を聞いてみませんか？"];
pub const FINAL_CTA_NOTE: &str = "お問い合わせは24時間受付中";

pub const FOOTER_COMPANY_LINK: &str = "運営会社";

/// `mailto:` target for the contact address.
pub fn mailto() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}
