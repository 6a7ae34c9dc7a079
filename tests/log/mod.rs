mod global_log_lists_the_same_history;
