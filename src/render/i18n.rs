//! Fixed UI strings for the two supported locales.

use crate::shared::Locale;

/// The page's translatable text for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub buying_label: &'static str,
    pub selling_label: &'static str,
    pub axis_label: &'static str,
    pub tooltip_date_label: &'static str,
    pub footnotes: [&'static str; 4],
    pub current_language: &'static str,
    pub toggle_label: &'static str,
}

const EN: Strings = Strings {
    title: "CNY/AUD Exchange Rate",
    subtitle: "Bank of China quotes, latest 10 observations",
    buying_label: "Buying Rate",
    selling_label: "Selling Rate",
    axis_label: "Rate (CNY)",
    tooltip_date_label: "Time",
    footnotes: [
        "Buying rate: the price at which the bank buys Australian dollars from customers.",
        "Selling rate: the price at which the bank sells Australian dollars to customers.",
        "Source: Bank of China foreign exchange quotations.",
        "Rates are for reference only and may differ from the price of an actual transaction.",
    ],
    current_language: "Language: English",
    toggle_label: "中文",
};

const ZH: Strings = Strings {
    title: "人民币/澳元汇率",
    subtitle: "中国银行牌价，最近10次报价",
    buying_label: "现汇买入价",
    selling_label: "现汇卖出价",
    axis_label: "汇率（人民币）",
    tooltip_date_label: "时间",
    footnotes: [
        "买入价：银行向客户买入澳元时使用的价格。",
        "卖出价：银行向客户卖出澳元时使用的价格。",
        "数据来源：中国银行外汇牌价。",
        "汇率仅供参考，以实际交易价格为准。",
    ],
    current_language: "当前语言：中文",
    toggle_label: "English",
};

const ERROR_EN: &str = "Exchange rate data is temporarily unavailable. Please try again later.";
const ERROR_ZH: &str = "汇率数据暂时无法获取，请稍后再试。";

impl Strings {
    pub fn for_locale(locale: Locale) -> &'static Strings {
        match locale {
            Locale::En => &EN,
            Locale::Zh => &ZH,
        }
    }
}

/// Generic message shown in place of the chart when the pipeline fails.
pub fn error_message(locale: Locale) -> &'static str {
    match locale {
        Locale::En => ERROR_EN,
        Locale::Zh => ERROR_ZH,
    }
}
