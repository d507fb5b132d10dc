//! Page-based listing parameters

use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::{AppError, AppResult};

const DEFAULT_PAGE_SIZE: i64 = 20;

fn default_page_id() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// Query parameters of a paginated listing (`page_id` is 1-based)
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number, starting at 1
    #[serde(default = "default_page_id")]
    pub page_id: i64,
    /// Rows per page
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page_id: default_page_id(),
            page_size: default_page_size(),
        }
    }
}

/// Row window handed to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i64,
    pub offset: i64,
}

impl PageQuery {
    /// Convert to a `LIMIT`/`OFFSET` pair: `offset = (page_id - 1) * page_size`.
    ///
    /// A page before the first one is rejected. `page_size` is forwarded as is.
    pub fn window(&self) -> AppResult<PageWindow> {
        if self.page_id < 1 {
            return Err(AppError::Validation(format!(
                "page_id must be at least 1, got {}",
                self.page_id
            )));
        }

        let offset = (self.page_id - 1)
            .checked_mul(self.page_size)
            .ok_or_else(|| AppError::Validation("page offset overflows".to_string()))?;

        Ok(PageWindow {
            limit: self.page_size,
            offset,
        })
    }
}
