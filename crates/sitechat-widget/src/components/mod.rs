pub mod bubble;
pub mod chat_window;
pub mod code_block;
pub mod input_row;
pub mod message_list;
