//! http response bodies

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ResultDto {
    pub result: String,
}

impl ResultDto {
    pub fn success() -> Self {
        ResultDto { result: "success".to_string() }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorDto {
    pub code: u16,
    pub msg: String,
}

#[derive(Debug, Serialize)]
pub struct ContractDto {
    // 合同截止日期
    pub deadline: String,
    // 合同编号
    pub number: String,
}
