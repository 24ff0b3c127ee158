mod session_id;
