use crate::lesson::Question;

/// The fixed knowledge-check bank. Order matters: scoring and the
/// end-of-test summary both index into this list.
pub static QUESTIONS: &[Question] = &[
    Question {
        id: 1,
        text: "What is the key feature that distinguishes RNNs from traditional neural networks?",
        options: [
            "They use more layers",
            "They have connections that form directed cycles",
            "They only process numerical data",
            "They require less computational power",
        ],
        correct_answer: 1,
        explanation: "RNNs have connections that form directed cycles, allowing them to maintain \
            an internal state or 'memory' that can persist information across time steps.",
    },
    Question {
        id: 2,
        text: "What problem do basic RNNs face when dealing with long-term dependencies?",
        options: [
            "Vanishing/exploding gradient problem",
            "Overfitting",
            "Underfitting",
            "Computational complexity",
        ],
        correct_answer: 0,
        explanation: "Basic RNNs struggle with the vanishing/exploding gradient problem, which \
            makes it difficult for them to learn and retain long-term dependencies in sequential \
            data.",
    },
    Question {
        id: 3,
        text: "What is the purpose of the 'forget gate' in an LSTM network?",
        options: [
            "To add new information to the cell state",
            "To decide what information to throw away from the cell state",
            "To determine the final output",
            "To initialize the network weights",
        ],
        correct_answer: 1,
        explanation: "The forget gate in an LSTM decides what information to throw away from the \
            cell state. It outputs a number between 0 and 1 for each value in the cell state, \
            where 1 means 'keep this completely' and 0 means 'get rid of this completely'.",
    },
    Question {
        id: 4,
        text: "What is the 'cell state' in an LSTM?",
        options: [
            "The final output of the network",
            "A conveyor belt of information that runs through the top of the LSTM",
            "The initial input to the network",
            "The learning rate parameter",
        ],
        correct_answer: 1,
        explanation: "The cell state in an LSTM acts as a conveyor belt of information that runs \
            through the top of the cell. It allows information to flow through the network with \
            only minor linear interactions, regulated by gates.",
    },
    Question {
        id: 5,
        text: "What is time-series forecasting?",
        options: [
            "Predicting when a model will finish training",
            "Scheduling when to update model weights",
            "Predicting future values based on previously observed values",
            "Measuring how long a neural network takes to process data",
        ],
        correct_answer: 2,
        explanation: "Time-series forecasting is the process of using a model to predict future \
            values based on previously observed values in a time series.",
    },
    Question {
        id: 6,
        text: "Which of the following is NOT a common step in preparing time-series data for \
            RNN/LSTM models?",
        options: [
            "Normalizing the data",
            "Creating sequences with a sliding window approach",
            "Randomizing the order of data points",
            "Splitting into training, validation, and test sets",
        ],
        correct_answer: 2,
        explanation: "Randomizing the order of data points is NOT a common step in preparing \
            time-series data, as it would destroy the temporal relationships in the data. \
            Time-series data must maintain its sequential order.",
    },
    Question {
        id: 7,
        text: "What is the purpose of the 'input gate' in an LSTM?",
        options: [
            "To decide what information to throw away",
            "To decide what new information to store in the cell state",
            "To determine the final output",
            "To initialize the network",
        ],
        correct_answer: 1,
        explanation: "The input gate in an LSTM decides what new information to store in the cell \
            state. It involves a sigmoid layer that decides which values to update and a tanh \
            layer that creates candidate values that could be added.",
    },
    Question {
        id: 8,
        text: "Which of the following is a limitation of using RNNs/LSTMs for stock price \
            prediction?",
        options: [
            "They can only process numerical data",
            "They require too much memory",
            "Markets are influenced by unpredictable events that models can't account for",
            "They can only make predictions one day ahead",
        ],
        correct_answer: 2,
        explanation: "A significant limitation of using RNNs/LSTMs for stock price prediction is \
            that markets are influenced by unpredictable events (like news, policy changes, etc.) \
            that models cannot account for based solely on historical price data.",
    },
    Question {
        id: 9,
        text: "What does the 'lookback window' parameter determine in time-series forecasting?",
        options: [
            "How far into the future to predict",
            "How many previous time steps to consider when making a prediction",
            "How often to update the model",
            "The learning rate for the model",
        ],
        correct_answer: 1,
        explanation: "The lookback window parameter determines how many previous time steps \
            (e.g., days of stock prices) the model considers when making a prediction.",
    },
    Question {
        id: 10,
        text: "Which type of forecasting uses predictions as inputs for subsequent predictions?",
        options: [
            "One-step forecasting",
            "Multi-step forecasting",
            "Recursive forecasting",
            "Parallel forecasting",
        ],
        correct_answer: 2,
        explanation: "Recursive forecasting uses predictions as inputs for subsequent \
            predictions. This approach can be used to forecast multiple steps into the future by \
            feeding each prediction back into the model.",
    },
];
