//! Shared test fixtures for bridge operation tests.
//!
//! `FakeApi` implements [`DiscordApi`] entirely in memory, recording every
//! call so tests can assert which requests the bridge made (including that
//! locally rejected arguments never reach the API). Channel and message
//! objects come from the `test_utils` serenity factories.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serenity::all::{ChannelId, ChannelType, GuildChannel, GuildId, Message, MessageId};
use serenity::async_trait;
use test_utils::serenity::{create_test_channel, create_test_message};

use crate::api::DiscordApi;
use crate::bridge::CordBridge;


pub(super) const GUILD_ID: u64 = 900000000000000001;
pub(super) const GUILD_ID_STR: &str = "900000000000000001";
pub(super) const CHANNEL_ID: u64 = 300000000000000001;
pub(super) const CHANNEL_ID_STR: &str = "300000000000000001";
pub(super) const MESSAGE_ID_STR: &str = "400000000000000001";

/// One recorded API call, with the arguments the bridge passed.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Call {
    GuildChannels,
    CreateCategory {
        name: String,
    },
    CreateTextChannel {
        name: String,
        parent_id: u64,
    },
    SendMessage {
        channel_id: u64,
        content: String,
    },
    EditMessage {
        channel_id: u64,
        message_id: u64,
        content: String,
    },
    DeleteMessage {
        channel_id: u64,
        message_id: u64,
    },
    MessagesBefore {
        before: Option<u64>,
        limit: u8,
    },
}

struct FakeState {
    channels: Mutex<Vec<GuildChannel>>,
    pages: Mutex<VecDeque<Vec<Message>>>,
    calls: Mutex<Vec<Call>>,
    fail_next: Mutex<Option<serenity::Error>>,
    next_id: AtomicU64,
}

/// In-memory `DiscordApi` recording every call.
///
/// Cloning shares state, so tests keep one handle for assertions while the
/// bridge owns another.
#[derive(Clone)]
pub(super) struct FakeApi {
    inner: Arc<FakeState>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(FakeState {
                channels: Mutex::new(Vec::new()),
                pages: Mutex::new(VecDeque::new()),
                calls: Mutex::new(Vec::new()),
                fail_next: Mutex::new(None),
                next_id: AtomicU64::new(500000000000000001),
            }),
        }
    }

    /// Seeds the guild's channel list.
    pub fn with_channels(self, channels: Vec<GuildChannel>) -> Self {
        *self.inner.channels.lock().unwrap() = channels;
        self
    }

    /// Seeds the message pages returned by successive history requests.
    /// Once the queue is drained, further requests return empty pages.
    pub fn with_pages(self, pages: Vec<Vec<Message>>) -> Self {
        *self.inner.pages.lock().unwrap() = pages.into();
        self
    }

    /// Makes the next API call fail with the given error.
    pub fn with_failure(self, err: serenity::Error) -> Self {
        *self.inner.fail_next.lock().unwrap() = Some(err);
        self
    }

    /// All calls recorded so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.inner.calls.lock().unwrap().clone()
    }

    /// Current channel list, as a later `guild_channels` would return it.
    pub fn channels(&self) -> Vec<GuildChannel> {
        self.inner.channels.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.inner.calls.lock().unwrap().push(call);
    }

    fn take_failure(&self) -> Option<serenity::Error> {
        self.inner.fail_next.lock().unwrap().take()
    }

    fn next_id(&self) -> u64 {
        self.inner.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

#[async_trait]
impl DiscordApi for FakeApi {
    async fn guild_channels(
        &self,
        _guild_id: GuildId,
    ) -> Result<Vec<GuildChannel>, serenity::Error> {
        self.record(Call::GuildChannels);
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        Ok(self.channels())
    }

    async fn create_category(
        &self,
        guild_id: GuildId,
        name: &str,
    ) -> Result<GuildChannel, serenity::Error> {
        self.record(Call::CreateCategory {
            name: name.to_string(),
        });
        if let Some(err) = self.take_failure() {
            return Err(err);
        }

        let category = create_test_channel(
            self.next_id(),
            guild_id.get(),
            name,
            ChannelType::Category,
            None,
        );
        self.inner.channels.lock().unwrap().push(category.clone());
        Ok(category)
    }

    async fn create_text_channel(
        &self,
        guild_id: GuildId,
        name: &str,
        parent_id: ChannelId,
    ) -> Result<GuildChannel, serenity::Error> {
        self.record(Call::CreateTextChannel {
            name: name.to_string(),
            parent_id: parent_id.get(),
        });
        if let Some(err) = self.take_failure() {
            return Err(err);
        }

        let channel = create_test_channel(
            self.next_id(),
            guild_id.get(),
            name,
            ChannelType::Text,
            Some(parent_id.get()),
        );
        self.inner.channels.lock().unwrap().push(channel.clone());
        Ok(channel)
    }

    async fn send_message(
        &self,
        channel_id: ChannelId,
        content: &str,
    ) -> Result<Message, serenity::Error> {
        self.record(Call::SendMessage {
            channel_id: channel_id.get(),
            content: content.to_string(),
        });
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        Ok(create_test_message(
            self.next_id(),
            channel_id.get(),
            content,
        ))
    }

    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        content: &str,
    ) -> Result<Message, serenity::Error> {
        self.record(Call::EditMessage {
            channel_id: channel_id.get(),
            message_id: message_id.get(),
            content: content.to_string(),
        });
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        Ok(create_test_message(
            message_id.get(),
            channel_id.get(),
            content,
        ))
    }

    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), serenity::Error> {
        self.record(Call::DeleteMessage {
            channel_id: channel_id.get(),
            message_id: message_id.get(),
        });
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        Ok(())
    }

    async fn messages_before(
        &self,
        _channel_id: ChannelId,
        before: Option<MessageId>,
        limit: u8,
    ) -> Result<Vec<Message>, serenity::Error> {
        self.record(Call::MessagesBefore {
            before: before.map(|id| id.get()),
            limit,
        });
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        Ok(self
            .inner
            .pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default())
    }
}

/// Builds a bridge over a clone of the fake, keeping `api` for assertions.
pub(super) fn bridge(api: &FakeApi) -> CordBridge<FakeApi> {
    CordBridge::with_api(api.clone(), GUILD_ID_STR).expect("guild id should parse")
}

/// Builds one history page with the given IDs in newest-first order, the way
/// Discord returns them.
pub(super) fn page_desc(ids: std::ops::RangeInclusive<u64>) -> Vec<Message> {
    ids.rev()
        .map(|id| create_test_message(id, CHANNEL_ID, &format!("message {id}")))
        .collect()
}

/// Extracts message IDs in result order.
pub(super) fn ids(messages: &[Message]) -> Vec<u64> {
    messages.iter().map(|m| m.id.get()).collect()
}
