pub mod response_dto;
