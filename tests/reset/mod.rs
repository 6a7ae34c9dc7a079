mod reset_to_an_earlier_commit;
