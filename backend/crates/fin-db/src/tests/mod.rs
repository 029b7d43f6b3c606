mod user_repository;
