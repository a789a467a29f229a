mod document_text_test;
mod risk_item_test;
