mod print_empty_sections_for_a_fresh_repository;
