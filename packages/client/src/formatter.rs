//! Message formatting utilities for client display.

use hiroba_server::{
    domain::ADMIN_NAME,
    infrastructure::dto::websocket::{ChatMessageDto, ServerEvent, UserDto},
};

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format any server event for the terminal
    ///
    /// # Arguments
    ///
    /// * `event` - The event received from the server
    /// * `my_name` - The current user's display name (to mark as "me")
    pub fn format_event(event: &ServerEvent, my_name: &str) -> String {
        match event {
            ServerEvent::Message(message) => Self::format_chat_message(message, my_name),
            ServerEvent::UserList(list) => Self::format_user_list(&list.users, my_name),
            ServerEvent::RoomList(list) => Self::format_room_list(&list.rooms),
            ServerEvent::Activity(name) => Self::format_activity(name),
        }
    }

    /// Format a chat message or a system notice
    pub fn format_chat_message(message: &ChatMessageDto, my_name: &str) -> String {
        if message.name == ADMIN_NAME {
            return format!("\n* {} ({})\n", message.text, message.time);
        }
        let me_suffix = if message.name == my_name { " (me)" } else { "" };
        format!(
            "\n[{}] {}{}: {}\n",
            message.time, message.name, me_suffix, message.text
        )
    }

    /// Format the member list of the current room
    pub fn format_user_list(users: &[UserDto], my_name: &str) -> String {
        let Some(room) = users.first().map(|u| u.room.as_str()) else {
            return "\nUsers in room: (none)\n".to_string();
        };
        let names: Vec<String> = users
            .iter()
            .map(|u| {
                if u.name == my_name {
                    format!("{} (me)", u.name)
                } else {
                    u.name.clone()
                }
            })
            .collect();
        format!("\nUsers in {}: {}\n", room, names.join(", "))
    }

    /// Format the list of active rooms
    pub fn format_room_list(rooms: &[String]) -> String {
        if rooms.is_empty() {
            return "\nActive rooms: (none)\n".to_string();
        }
        format!("\nActive rooms: {}\n", rooms.join(", "))
    }

    /// Format a typing notification
    pub fn format_activity(name: &str) -> String {
        format!("\n{} is typing...\n", name)
    }

    /// Format a text frame that could not be parsed
    pub fn format_raw_message(text: &str) -> String {
        format!("\n{}\n", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hiroba_server::infrastructure::dto::websocket::{RoomListDto, UserListDto};

    fn user(name: &str, room: &str) -> UserDto {
        UserDto {
            id: format!("id-{}", name),
            name: name.to_string(),
            room: room.to_string(),
        }
    }

    #[test]
    fn test_format_admin_notice() {
        // テスト項目: システムからのお知らせは送信者名なしで表示される
        // given (前提条件):
        let event = ServerEvent::Message(ChatMessageDto {
            name: "Admin".to_string(),
            text: "Welcome to Chat App".to_string(),
            time: "3:04:05 PM".to_string(),
        });

        // when (操作):
        let result = MessageFormatter::format_event(&event, "Alice");

        // then (期待する結果):
        assert_eq!(result, "\n* Welcome to Chat App (3:04:05 PM)\n");
    }

    #[test]
    fn test_format_own_chat_message() {
        // テスト項目: 自分のメッセージには (me) が付く
        // given (前提条件):
        let message = ChatMessageDto {
            name: "Alice".to_string(),
            text: "hi".to_string(),
            time: "3:04:05 PM".to_string(),
        };

        // when (操作):
        let result = MessageFormatter::format_chat_message(&message, "Alice");

        // then (期待する結果):
        assert_eq!(result, "\n[3:04:05 PM] Alice (me): hi\n");
    }

    #[test]
    fn test_format_user_list() {
        // テスト項目: 参加者一覧がルーム名とともに表示される
        // given (前提条件):
        let event = ServerEvent::UserList(UserListDto {
            users: vec![user("Alice", "lobby"), user("Bob", "lobby")],
        });

        // when (操作):
        let result = MessageFormatter::format_event(&event, "Bob");

        // then (期待する結果):
        assert_eq!(result, "\nUsers in lobby: Alice, Bob (me)\n");
    }

    #[test]
    fn test_format_empty_lists() {
        // テスト項目: 空の一覧は (none) と表示される
        // given (前提条件):
        let users = ServerEvent::UserList(UserListDto { users: vec![] });
        let rooms = ServerEvent::RoomList(RoomListDto { rooms: vec![] });

        // when (操作):

        // then (期待する結果):
        assert_eq!(
            MessageFormatter::format_event(&users, "Alice"),
            "\nUsers in room: (none)\n"
        );
        assert_eq!(
            MessageFormatter::format_event(&rooms, "Alice"),
            "\nActive rooms: (none)\n"
        );
    }

    #[test]
    fn test_format_activity() {
        // テスト項目: 入力中通知の表示
        assert_eq!(
            MessageFormatter::format_event(&ServerEvent::Activity("Bob".to_string()), "Alice"),
            "\nBob is typing...\n"
        );
    }
}
