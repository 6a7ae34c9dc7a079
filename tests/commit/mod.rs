mod commits_with_equal_content_have_equal_ids;
