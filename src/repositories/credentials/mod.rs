pub mod credential_repo;
