mod guestbook_message;
mod payment_status;
mod theme;
mod wedding;
