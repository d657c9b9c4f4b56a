//! Message store for the document chat thread.
//!
//! DESIGN
//! ======
//! Server history is the source of truth and is replaced wholesale on every
//! refresh. Sends are optimistic: a local entry is appended immediately and
//! tracked through `Pending -> Confirmed | Failed`. Failed entries survive
//! refreshes until the user retries or discards them.
//!
//! The next `order` is the count of confirmed and pending entries + 1. Two
//! sends issued before the first resolves therefore claim N+1 and N+2
//! without coordination with the server. Failed entries never reached the
//! server, so they hold no slot in its sequence; a retry claims a fresh one.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{MessageDto, Role};
use crate::util::scope::Generation;

/// Delivery state of a chat entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Delivery {
    /// Came from the server, or the server acknowledged the create.
    Confirmed,
    /// Shown optimistically; create request in flight.
    Pending,
    /// Create request failed; awaiting retry or discard.
    Failed(String),
}

/// A single chat entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEntry {
    pub id: String,
    pub content: String,
    pub order: u32,
    pub sent_at: Option<String>,
    pub role: Role,
    pub delivery: Delivery,
}

impl ChatEntry {
    fn from_server(dto: MessageDto) -> Self {
        let role = dto.role.unwrap_or_else(|| Role::from_order_parity(dto.order));
        Self {
            id: dto.id,
            content: dto.content,
            order: dto.order,
            sent_at: dto.sent_at,
            role,
            delivery: Delivery::Confirmed,
        }
    }

    fn is_local(&self) -> bool {
        !matches!(self.delivery, Delivery::Confirmed)
    }
}

/// Create request produced by an optimistic append or a retry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSend {
    pub local_id: String,
    pub content: String,
    pub order: u32,
}

/// Chat state for the document currently on screen.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub document_id: Option<String>,
    pub entries: Vec<ChatEntry>,
    pub refresh_generation: Generation,
}

impl ChatState {
    /// Switch to another document, dropping the previous thread.
    pub fn reset(&mut self, document_id: &str) {
        self.document_id = Some(document_id.to_owned());
        self.entries.clear();
        self.refresh_generation.advance();
    }

    pub fn next_order(&self) -> u32 {
        let live = self
            .entries
            .iter()
            .filter(|entry| !matches!(entry.delivery, Delivery::Failed(_)))
            .count();
        u32::try_from(live).map_or(u32::MAX, |len| len.saturating_add(1))
    }

    /// Optimistically append `text`. Returns `None` (and changes nothing) when
    /// the trimmed text is empty.
    pub fn append(&mut self, text: &str, local_id: String, sent_at: String) -> Option<PendingSend> {
        let content = text.trim();
        if content.is_empty() {
            return None;
        }
        let order = self.next_order();
        self.entries.push(ChatEntry {
            id: local_id.clone(),
            content: content.to_owned(),
            order,
            sent_at: Some(sent_at),
            role: Role::User,
            delivery: Delivery::Pending,
        });
        Some(PendingSend { local_id, content: content.to_owned(), order })
    }

    /// The server accepted the create; the next refresh replaces the entry.
    pub fn confirm(&mut self, local_id: &str) {
        if let Some(entry) = self.entry_mut(local_id) {
            entry.delivery = Delivery::Confirmed;
        }
    }

    pub fn fail(&mut self, local_id: &str, reason: String) {
        if let Some(entry) = self.entry_mut(local_id) {
            entry.delivery = Delivery::Failed(reason);
        }
    }

    /// Move a failed entry back to pending under the next free order and hand
    /// back its create request.
    pub fn retry(&mut self, local_id: &str) -> Option<PendingSend> {
        let order = self.next_order();
        let entry = self.entry_mut(local_id)?;
        if !matches!(entry.delivery, Delivery::Failed(_)) {
            return None;
        }
        entry.delivery = Delivery::Pending;
        entry.order = order;
        Some(PendingSend { local_id: entry.id.clone(), content: entry.content.clone(), order })
    }

    /// Remove a failed entry. Pending and confirmed entries are left alone.
    pub fn discard(&mut self, local_id: &str) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|entry| !(entry.id == local_id && matches!(entry.delivery, Delivery::Failed(_))));
        self.entries.len() != before
    }

    /// Start a history refresh and return its ticket.
    pub fn begin_refresh(&mut self) -> Generation {
        self.refresh_generation.advance()
    }

    /// Replace server history. Local pending/failed entries are kept. Stale
    /// tickets are ignored; returns whether the history was applied.
    pub fn apply_history(&mut self, ticket: Generation, history: Vec<MessageDto>) -> bool {
        if !self.refresh_generation.is_current(ticket) {
            return false;
        }
        let local = self
            .entries
            .drain(..)
            .filter(ChatEntry::is_local)
            .collect::<Vec<_>>();
        self.entries = history.into_iter().map(ChatEntry::from_server).collect();
        self.entries.extend(local);
        true
    }

    /// Entries in display order (ascending `order`, stable on ties).
    pub fn sorted(&self) -> Vec<ChatEntry> {
        let mut entries = self.entries.clone();
        entries.sort_by_key(|entry| entry.order);
        entries
    }

    /// True while any send awaits the server.
    pub fn awaiting_reply(&self) -> bool {
        self.entries.iter().any(|entry| entry.delivery == Delivery::Pending)
    }

    fn entry_mut(&mut self, local_id: &str) -> Option<&mut ChatEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == local_id && entry.is_local())
    }
}
