//! Static localization tables.
//!
//! Each supported language maps to one flat [`Translations`] table. The event
//! name is shared across languages. Tables are `static` and read-only; the
//! active language is resolved per request and passed down explicitly.

use crate::status::Status;

/// Event the board was set up for. Shared by every language.
pub const EVENT: &str = "大埔宏福苑五級火";

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    /// Traditional Chinese (default).
    Cht,
    /// English.
    En,
}

impl Lang {
    /// Every supported language, in switcher order.
    pub const ALL: [Self; 2] = [Self::Cht, Self::En];

    /// Code used in the `lang` / `form_lang` request parameters.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Cht => "cht",
            Self::En => "en",
        }
    }

    /// BCP 47 tag for the `<html lang>` attribute.
    #[must_use]
    pub const fn html_tag(self) -> &'static str {
        match self {
            Self::Cht => "zh-Hant",
            Self::En => "en",
        }
    }

    /// Parse a request code. Only exact codes are recognized.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Resolve the first recognized code, falling back to `default`.
    #[must_use]
    pub fn resolve<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>, default: Self) -> Self {
        candidates
            .into_iter()
            .flatten()
            .find_map(Self::parse)
            .unwrap_or(default)
    }

    /// The UI strings for this language.
    #[must_use]
    pub const fn strings(self) -> &'static Translations {
        match self {
            Self::Cht => &CHT,
            Self::En => &EN,
        }
    }
}

/// Flat set of UI strings for one language.
#[derive(Debug)]
pub struct Translations {
    pub lang_name: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub update_header: &'static str,
    pub lbl_name: &'static str,
    pub ph_name: &'static str,
    pub lbl_id: &'static str,
    pub hint_id: &'static str,
    pub ph_id: &'static str,
    pub lbl_loc: &'static str,
    pub ph_loc: &'static str,
    pub lbl_status: &'static str,
    pub opt_safe: &'static str,
    pub opt_help: &'static str,
    pub opt_other: &'static str,
    pub lbl_msg: &'static str,
    pub ph_msg: &'static str,
    pub btn_submit: &'static str,
    pub search_ph: &'static str,
    pub btn_search: &'static str,
    pub empty_state: &'static str,
    pub meta_loc: &'static str,
    pub meta_time: &'static str,
    pub err_db: &'static str,
    pub err_req: &'static str,
    pub err_save: &'static str,
    pub err_delete: &'static str,
    pub prev_page: &'static str,
    pub next_page: &'static str,
    pub page_prefix: &'static str,
    pub page_suffix: &'static str,
    pub btn_delete: &'static str,
    pub err_auth: &'static str,
    pub confirm_delete: &'static str,
    pub err_id: &'static str,
}

impl Translations {
    /// Localized label for a status badge.
    #[must_use]
    pub const fn status_label(&self, status: Status) -> &'static str {
        match status {
            Status::Safe => self.opt_safe,
            Status::Help => self.opt_help,
            Status::Other => self.opt_other,
        }
    }

    /// Localized "page N" label.
    #[must_use]
    pub fn page_label(&self, page: u32) -> String {
        format!("{}{page}{}", self.page_prefix, self.page_suffix)
    }
}

static CHT: Translations = Translations {
    lang_name: "繁體中文",
    title: "平安通報程式",
    subtitle: "緊急狀態佈告欄",
    update_header: "更新您的狀態",
    lbl_name: "全名",
    ph_name: "例：陳大文",
    lbl_id: "身份證號碼",
    hint_id: "(可用於搜尋，但不對外公開)",
    ph_id: "例：員工編號或身份證號碼",
    lbl_loc: "目前位置",
    ph_loc: "例：避難所#3, 灣仔",
    lbl_status: "狀態",
    opt_safe: "我平安無事",
    opt_help: "我需要幫助",
    opt_other: "其他 / 正在移動",
    lbl_msg: "訊息 (選填)",
    ph_msg: "我有水和食物。請聯繫...",
    btn_submit: "發佈更新",
    search_ph: "按姓名、ID、位置搜尋...",
    btn_search: "搜尋",
    empty_state: "找不到任何更新。",
    meta_loc: "位置",
    meta_time: "時間",
    err_db: "資料庫暫時無法使用。",
    err_req: "姓名、位置和狀態是必需的。",
    err_save: "儲存狀態時出錯",
    err_delete: "刪除記錄時出錯",
    prev_page: "上一頁",
    next_page: "下一頁",
    page_prefix: "第 ",
    page_suffix: " 頁",
    btn_delete: "刪除",
    err_auth: "身份驗證失敗或權限不足。",
    confirm_delete: "確定要刪除此記錄嗎？",
    err_id: "無法刪除：缺少記錄 ID。",
};

static EN: Translations = Translations {
    lang_name: "English",
    title: "I Am Safe",
    subtitle: "Emergency Status Board",
    update_header: "Update your status",
    lbl_name: "Full name",
    ph_name: "e.g. Chan Tai Man",
    lbl_id: "ID number",
    hint_id: "(searchable, never shown publicly)",
    ph_id: "e.g. staff number or ID card number",
    lbl_loc: "Current location",
    ph_loc: "e.g. Shelter #3, Wan Chai",
    lbl_status: "Status",
    opt_safe: "I am safe",
    opt_help: "I need help",
    opt_other: "Other / on the move",
    lbl_msg: "Message (optional)",
    ph_msg: "I have water and food. Please contact...",
    btn_submit: "Post update",
    search_ph: "Search by name, ID, location...",
    btn_search: "Search",
    empty_state: "No updates found.",
    meta_loc: "Location",
    meta_time: "Time",
    err_db: "The database is temporarily unavailable.",
    err_req: "Name, location and status are required.",
    err_save: "Error saving status",
    err_delete: "Error deleting record",
    prev_page: "Previous",
    next_page: "Next",
    page_prefix: "Page ",
    page_suffix: "",
    btn_delete: "Delete",
    err_auth: "Authentication failed or insufficient permissions.",
    confirm_delete: "Delete this record?",
    err_id: "Cannot delete: missing record ID.",
};
