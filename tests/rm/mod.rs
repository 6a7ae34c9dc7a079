mod rm_staged_file_keeps_the_working_copy;
mod rm_unknown_file_is_reported;
