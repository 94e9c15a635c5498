use async_openai::types::chat::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestUserMessage, ChatCompletionRequestUserMessageContent,
};

/// Token pair wrapped around user text in the moderated pipeline so the model
/// reads it as data rather than instructions.
pub const INPUT_DELIMITER: &str = "####";

/// Classification instruction for the moderated pipeline: user text arrives
/// wrapped in delimiters and the sentiment label carries an emoji.
pub const SYSTEM_PROMPT: &str = r#"You are a sentiment analysing agent.

You will be provided with text by user, delimited by #### characters. You have to analyze the text and output the sentiment from the text and also a 1-2 sentence explanation on why that's the sentiment.

If the text is not in English, first translate it to English. If input text is more than 100 words, do not translate. The explanation(reason) should also some parts of text which is useful for sentiment analysis.

Possible sentiment values are 'Positive', 'Negative', 'Neutral'. Preserve the case. Annotate the sentiment with its emoji: Positive 😁, Negative 😞, Neutral 😐.
Do not answer any other question of user irrelevant to sentiment analysis.


The output format for english text is shown delimited below by triple backticks:
```
Sentiment: <sentiment>

Reason: <Reason for the sentiment>
```

The output format for non-english text is shown below delimited by triple backticks:
Note: If the input text is greater than 100 words omit the 'Translation' section below.
```
Sentiment: <sentiment>

Translation: <Translation in English>

Reason: <Reason for the sentiment>
```

Output should not contain triple backticks.

Only use this format if sentiment analysis can be performed on text. Do not use it for irrelavent user queries.
"#;

/// Classification instruction used when the moderation gate is disabled; user
/// text is passed through unwrapped.
pub const SYSTEM_PROMPT_UNWRAPPED: &str = r#"You are a sentiment analysing agent.

You will be provided with text by user. You have to analyze the text and output the sentiment from the text and also a 1-2 sentence explanation on why that's the sentiment.

If the text is not in English, first translate it to English. If input text is more than 100 words, do not translate. The explanation(reason) should also some parts of text which is useful for sentiment analysis.

Possible sentiment values are 'Positive', 'Negative', 'Neutral'. Preserve the case.
Do not answer any other question of user irrelevant to sentiment analysis.


The output format for english text is shown delimited below by triple backticks:
```
Sentiment: <sentiment>

Reason: <Reason for the sentiment>
```

The output format for non-english text is shown below delimited by triple backticks:
Note: If the input text is greater than 100 words omit the 'Translation' section below.
```
Sentiment: <sentiment>

Translation: <Translation in English>

Reason: <Reason for the sentiment>
```

Output should not contain triple backticks.

Only use this format if sentiment analysis can be performed on text. Do not use it for irrelavent user queries.
"#;

/// Instruction for the refusal notice generated when moderation flags a
/// submission. Only the violated category is supplied; the flagged text
/// itself never reaches the completion endpoint.
const REFUSAL_PROMPT: &str = "You are the messenger for a content moderation system. A user's submission to a sentiment analyzer was rejected because it violated the content policy. Write a short, polite notice (1-2 sentences) telling the user their text could not be analyzed, naming the violated category. Do not repeat or quote the submission.";

pub fn wrap_input(text: &str) -> String {
    format!("{INPUT_DELIMITER}{text}{INPUT_DELIMITER}")
}

/// Two-element exchange for the classification call: the fixed instruction,
/// then the user text (wrapped in the moderated pipeline).
pub fn classification_messages(text: &str, moderated: bool) -> Vec<ChatCompletionRequestMessage> {
    let (instruction, content) = if moderated {
        (SYSTEM_PROMPT, wrap_input(text))
    } else {
        (SYSTEM_PROMPT_UNWRAPPED, text.to_string())
    };

    vec![
        ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
            content: instruction.into(),
            name: None,
        }),
        ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
            content: ChatCompletionRequestUserMessageContent::Text(content),
            name: None,
        }),
    ]
}

/// Two-element exchange for the refusal notice.
pub fn refusal_messages(category: &str) -> Vec<ChatCompletionRequestMessage> {
    vec![
        ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
            content: REFUSAL_PROMPT.into(),
            name: None,
        }),
        ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
            content: ChatCompletionRequestUserMessageContent::Text(format!(
                "The submission was flagged for the category: {category}."
            )),
            name: None,
        }),
    ]
}
