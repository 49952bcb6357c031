//! State of the admin panel that lists blogs, comments, users and categories.
//!
//! The panel shows one table at a time, one page at a time. User actions and
//! API responses are applied to a [`ManageState`] with
//! [`apply`][ManageState::apply], which returns the next state. While a list
//! is being loaded [`pending_request`][ManageState::pending_request] names the
//! request the caller should send, its response is fed back as
//! [`Action::Loaded`].
//!
//! ```
//! use quill::manage::{Action, ManageState, Table};
//! use serde_json::json;
//!
//! let state = ManageState::new();
//! assert_eq!(state.pending_request().unwrap().url, "/api/manage/blog?page=1");
//!
//! let state = state.apply(Action::SelectTable(Table::User));
//! let state = state.apply(Action::Loaded(json!({
//!     "page": { "item_count": 1, "page_index": 1, "page_count": 1 },
//!     "users": [{ "id": "u1", "name": "Ada" }],
//! })));
//! assert!(state.pending_request().is_none());
//! assert_eq!(state.items.len(), 1);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::{check_response, ApiError, Request};
use crate::pagination::Page;
use crate::{Error, Result, Value};

/// The tables that can be managed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Table {
    Blog,
    Comment,
    User,
    Category,
}

impl Table {
    pub const ALL: [Table; 4] = [Table::Blog, Table::Comment, Table::User, Table::Category];

    /// The name used in URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Blog => "blog",
            Table::Comment => "comment",
            Table::User => "user",
            Table::Category => "category",
        }
    }

    /// The member of the list response that holds the items.
    pub fn items_key(&self) -> &'static str {
        match self {
            Table::Blog => "blogs",
            Table::Comment => "comments",
            Table::User => "users",
            Table::Category => "categories",
        }
    }

    /// The API endpoint listing page `page` of this table.
    pub fn list_url(&self, page: u64) -> String {
        format!("/api/manage/{}?page={page}", self.as_str())
    }

    /// The page for editing the item with the given id.
    pub fn edit_url(&self, id: &str) -> String {
        format!("/manage/{}/edit?id={id}", self.as_str())
    }

    /// The API endpoint deleting the item with the given id.
    pub fn delete_url(&self, id: &str) -> String {
        format!("/api/{}/{id}/delete", self.as_str())
    }

    /// The page for creating a new item. Comments and users are only
    /// created by visitors so they have none.
    pub fn create_url(&self) -> Option<&'static str> {
        match self {
            Table::Blog => Some("/manage/blog/create"),
            Table::Category => Some("/manage/category/create"),
            Table::Comment | Table::User => None,
        }
    }

    /// A short human readable name for an item of this table.
    ///
    /// Comments have no name so the first 40 characters of their content
    /// are used.
    pub fn item_name(&self, item: &Value) -> String {
        let field = |key: &str| item.get(key).and_then(Value::as_str).unwrap_or_default();
        match self {
            Table::Blog => field("title").to_owned(),
            Table::Comment => field("content").chars().take(40).collect(),
            Table::User | Table::Category => field("name").to_owned(),
        }
    }

    /// The confirmation prompt shown before deleting an item.
    pub fn delete_prompt(&self, item: &Value) -> String {
        format!(
            "Delete \u{201c}{}\u{201d}? This cannot be undone!",
            self.item_name(item)
        )
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Table {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Table::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::invalid_argument(format!("unknown table `{s}`")))
    }
}

/// The state of the admin panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ManageState {
    /// The table being shown.
    pub table: Table,
    /// The page that was last requested.
    pub current_page: u64,
    /// The page descriptor of the shown items.
    pub page: Page,
    /// The shown items.
    pub items: Vec<Value>,
    /// Whether the items of `current_page` are being fetched.
    pub loading: bool,
    /// The error of the last failed request.
    pub error: Option<ApiError>,
}

/// Something that happened in the admin panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The user switched to another table, this shows its first page.
    SelectTable(Table),
    /// The user clicked a page link.
    GotoPage(u64),
    /// A list response body arrived.
    Loaded(Value),
    /// A request failed.
    Failed(ApiError),
    /// An item was deleted, the current page is reloaded.
    Deleted,
}

impl Default for ManageState {
    fn default() -> Self {
        Self::new()
    }
}

impl ManageState {
    /// The initial state, loading the first page of blogs.
    pub fn new() -> Self {
        Self {
            table: Table::Blog,
            current_page: 1,
            page: Page::default(),
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// Apply an action and return the next state.
    ///
    /// Responses are not matched up with requests, the last one to arrive
    /// wins. A response that cannot be understood is recorded in
    /// [`error`][ManageState::error] like any other failed request, the
    /// table and page stay as they were.
    pub fn apply(self, action: Action) -> Self {
        tracing::debug!(table = %self.table, page = self.current_page, ?action, "manage action");
        match action {
            Action::SelectTable(table) => Self {
                table,
                current_page: 1,
                items: Vec::new(),
                loading: true,
                error: None,
                ..self
            },
            Action::GotoPage(page) => Self {
                current_page: page,
                items: Vec::new(),
                loading: true,
                error: None,
                ..self
            },
            Action::Deleted => Self {
                loading: true,
                error: None,
                ..self
            },
            Action::Loaded(body) => {
                let listing = check_response(body).and_then(|body| self.parse_listing(body));
                match listing {
                    Ok((page, items)) => Self {
                        page,
                        items,
                        loading: false,
                        error: None,
                        ..self
                    },
                    Err(err) => self.failed(err),
                }
            }
            Action::Failed(err) => self.failed(err),
        }
    }

    /// The request to send while the current page is loading.
    pub fn pending_request(&self) -> Option<Request> {
        self.loading.then(|| {
            let url = format!("/api/manage/{}", self.table);
            Request::get(&url, [("page", self.current_page.to_string())])
        })
    }

    fn failed(self, err: ApiError) -> Self {
        tracing::debug!(table = %self.table, error = %err, "manage request failed");
        Self {
            loading: false,
            error: Some(err),
            ..self
        }
    }

    fn parse_listing(
        &self,
        mut body: Value,
    ) -> std::result::Result<(Page, Vec<Value>), ApiError> {
        let key = self.table.items_key();
        let items = match body.get_mut(key).map(Value::take) {
            Some(Value::Array(items)) => items,
            Some(Value::Null) | None => {
                return Err(ApiError::invalid_response(key, format!("response is missing `{key}`")))
            }
            Some(_) => {
                return Err(ApiError::invalid_response(key, format!("expected `{key}` to be an array")))
            }
        };
        let page = match body.get_mut("page").map(Value::take) {
            Some(page) => serde_json::from_value(page).map_err(|err| {
                ApiError::invalid_response("page", format!("invalid page descriptor: {err}"))
            })?,
            None => return Err(ApiError::invalid_response("page", "response is missing `page`")),
        };
        Ok((page, items))
    }
}
