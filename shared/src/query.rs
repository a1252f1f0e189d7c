//! List query types
//!
//! Search criteria, status filter and page math shared by every list view.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::kana::to_katakana;
use crate::models::{GuestDetail, InvalidStatus, ReservationStatus};

/// Fixed page size of every list view
pub const PAGE_SIZE: usize = 20;

/// Guest search criteria (`POST /guest/search`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestSearchCriteria {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kana_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out_date: Option<NaiveDate>,
}

impl GuestSearchCriteria {
    /// Trimmed text fields, kana folded to full-width katakana.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            kana_name: to_katakana(&self.kana_name),
            phone: self.phone.trim().to_string(),
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date,
        }
    }

    /// True when no field would narrow the result.
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.kana_name.trim().is_empty()
            && self.phone.trim().is_empty()
            && self.check_in_date.is_none()
            && self.check_out_date.is_none()
    }
}

/// Search request body: criteria plus the deleted-visibility toggle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestSearchRequest {
    #[serde(flatten)]
    pub criteria: GuestSearchCriteria,
    pub show_deleted: bool,
}

/// Reservation status filter of the guest list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ReservationStatus),
}

impl StatusFilter {
    /// Keeps guests with at least one reservation in the selected status.
    pub fn matches(&self, detail: &GuestDetail) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => detail.has_status(*status),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("ALL"),
            Self::Only(status) => f.write_str(status.as_str()),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

/// Number of pages for `total` items; never less than one.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Clamp a requested page number into `[1, total_pages]`.
pub fn clamp_page(requested: usize, total: usize, page_size: usize) -> usize {
    requested.clamp(1, total_pages(total, page_size))
}

/// One page of a derived list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSlice<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Page number after clamping (1-based)
    pub page: usize,
    /// Total pages (at least 1)
    pub total_pages: usize,
    /// Total items across all pages
    pub total: usize,
    /// 1-based position of the first item, 0 when empty
    pub first: usize,
    /// 1-based position of the last item, 0 when empty
    pub last: usize,
}

impl<T: Clone> PageSlice<T> {
    /// Cut page `requested` (clamped) out of `all`.
    pub fn cut(all: &[T], requested: usize, page_size: usize) -> Self {
        let total = all.len();
        let total_pages = total_pages(total, page_size);
        let page = requested.clamp(1, total_pages);
        let start = ((page - 1) * page_size).min(total);
        let end = (start + page_size).min(total);
        Self {
            items: all[start..end].to_vec(),
            page,
            total_pages,
            total,
            first: if total == 0 { 0 } else { start + 1 },
            last: end,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
